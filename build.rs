fn main() {
    println!("cargo:rerun-if-changed=resources/songcard.ico");

    #[cfg(windows)]
    {
        const ICON: &str = "resources/songcard.ico";
        if !std::path::Path::new(ICON).exists() {
            println!("cargo:warning={ICON} missing, executable will use the default icon");
            return;
        }

        let mut res = winresource::WindowsResource::new();
        res.set_icon(ICON)
            .set("ProductName", "Songcard")
            .set("FileDescription", "Songcard music library");
        if let Err(e) = res.compile() {
            println!("cargo:warning=failed to embed Windows resources: {e}");
        }
    }
}
