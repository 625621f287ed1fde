#[allow(dead_code)]
pub fn init() {
    #[cfg(feature = "logger")]
    {
        use std::io::Write;
        let _ = env_logger::builder()
            .format(|buf, record| writeln!(buf, "{}", record.args()))
            .is_test(true)
            .try_init();
    }
}
