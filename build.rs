use embed_manifest::{
    manifest::{ActiveCodePage, SupportedOS::{Windows10}, Setting},
    embed_manifest, new_manifest,
};

fn main() {
    if std::env::var_os("CARGO_CFG_WINDOWS").is_some() {
        // UTF-8 code page, so the colored log output of the probe renders in the console
        embed_manifest(new_manifest("shadow_yield_probe.exe.manifest")
            // Remove defaults we don't care about
            .remove_dependency("Microsoft.Windows.Common-Controls")
            .remove_max_version_tested()
            // Set what we care about
            .active_code_page(ActiveCodePage::Utf8)
            .supported_os(Windows10..=Windows10) // Also includes Windows 11
            .long_path_aware(Setting::Enabled)
        )
        .expect("unable to embed manifest file");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
