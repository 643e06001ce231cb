use std::io::Write;

pub fn run() {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = crate::script::run(&mut out) {
        eprintln!("failed to write script output: {e}");
        std::process::exit(1);
    }

    let _ = out.flush();
}
