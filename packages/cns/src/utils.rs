use hex;
use tiny_keccak::Keccak;

pub fn keccak256(i: &[u8]) -> Vec<u8> {
    let mut o = vec![0u8; 32];
    Keccak::keccak256(i, &mut o);
    return o;
}

pub fn get_label_from_name(name: &String) -> Vec<u8> {
    keccak256(name.as_bytes())
}

pub fn get_token_id_from_label(label: &Vec<u8>) -> String {
    hex::encode(label)
}

pub fn namehash(name: &str) -> Vec<u8> {
    let mut node = vec![0u8; 32];
    if name.is_empty() {
        return node;
    }
    let mut labels: Vec<&str> = name.split(".").collect();
    labels.reverse();
    for label in labels.iter() {
        let mut labelhash = [0u8; 32];
        Keccak::keccak256(label.as_bytes(), &mut labelhash);
        node.append(&mut labelhash.to_vec());
        labelhash = [0u8; 32];
        Keccak::keccak256(node.as_slice(), &mut labelhash);
        node = labelhash.to_vec();
    }
    node
}
