use nanote_core::Engine;

fn main() {
    let engine = Engine::new(false);
    let plaintext = "hello, world!";
    println!("Plaintext: {}", plaintext);

    let encoded = match engine.encode(plaintext) {
        Ok(amount) => amount,
        Err(err) => {
            eprintln!("encoding failed: {}", err);
            std::process::exit(1);
        }
    };
    println!("Encoded: {}", encoded);

    match engine.decode(&encoded) {
        Ok(text) => println!("Decoded: {}", text),
        Err(err) => {
            eprintln!("decoding failed: {}", err);
            std::process::exit(1);
        }
    }
}
