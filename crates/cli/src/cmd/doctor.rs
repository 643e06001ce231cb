pub fn run() {
    println!("OK   gleb doctor");
    println!("{}", gleblang_core::doctor_banner());
    println!("cli: v{}", env!("CARGO_PKG_VERSION"));
}
