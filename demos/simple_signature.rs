use bls_sig::{hash_to_curve::try_and_increment::SHAKE_HASH_TO_G1, PrivateKey};

use clap::{App, Arg};
use log::debug;

fn main() {
    env_logger::init();

    let matches = App::new("SimpleSignature")
        .about("Show an example of a simple signature with a random key")
        .arg(
            Arg::with_name("message")
                .short("m")
                .value_name("MESSAGE")
                .help("Sets the message to sign")
                .required(true),
        )
        .get_matches();

    let message = matches.value_of("message").unwrap();

    let hasher = &*SHAKE_HASH_TO_G1;

    let sk = PrivateKey::generate().expect("system randomness should be available");
    debug!("sk: {}", hex::encode(sk.to_bytes()));
    let pk = sk.to_public();

    let sig = sk.sign(message.as_bytes(), hasher).unwrap();
    println!("pk:  {}", hex::encode(pk.to_bytes().unwrap()));
    println!("sig: {}", hex::encode(sig.to_bytes().unwrap()));

    let valid = pk.verify(message.as_bytes(), &sig, hasher).unwrap();
    println!("valid: {}", valid);
}
