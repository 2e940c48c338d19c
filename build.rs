fn main() {
    println!("cargo:rerun-if-changed=resources/hellowin.rc");
    println!("cargo:rerun-if-changed=resources/hellowin.exe.manifest");
    embed_resource::compile("resources/hellowin.rc", embed_resource::NONE)
        .manifest_optional()
        .unwrap();
}
