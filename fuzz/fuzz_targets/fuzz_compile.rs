use afl::fuzz;

fn main() {
    let settings = zc::Settings::default();

    fuzz!(|data: &[u8]| {
        // Convert bytes to string
        if let Ok(input) = std::str::from_utf8(data) {
            // Any input must end in bytecode or a positioned error
            let _ = zc::compile(input, &settings, &mut std::io::sink());
        }
    });
}
