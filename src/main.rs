fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);

        log::info!("beautyflow client mounting");
        leptos::mount::mount_to_body(beautyflow::app::App);
    }
}
