
/// Installs a logger showing `debug` records and up. Every test installs the same one, so the
/// level doesn't depend on which test runs first.
pub(crate) fn init_logger() {
    let _ = pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
