// The client bundle is embedded from frontend/dist, which only exists after
// `trunk build`. Native builds and tests get a stub page instead.

use std::{fs, path::PathBuf};

fn main() {
    let bundle = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../frontend/dist");
    println!("cargo:rerun-if-changed={}", bundle.display());

    let index = bundle.join("index.html");
    if index.exists() {
        return;
    }
    fs::create_dir_all(&bundle).expect("cannot create frontend/dist");
    fs::write(
        &index,
        "<!doctype html><title>anomview</title><p>Client not built. Run <code>trunk build</code> in frontend/.</p>\n",
    )
    .expect("cannot write stub index.html");
}
