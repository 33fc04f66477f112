use vergen::EmitBuilder;

fn main() {
    // build timestamp must follow source and manifest changes
    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=Cargo.toml");

    let emitted = EmitBuilder::builder()
        .build_timestamp()
        .cargo_debug()
        .cargo_features()
        .rustc_semver()
        .rustc_channel()
        .rustc_host_triple()
        .emit();

    if let Err(e) = emitted {
        panic!("failed to emit slot-probe build info | reason={e:?}");
    }
}
