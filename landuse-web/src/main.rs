//! Native stub of the browser viewer.

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("The viewer runs in the browser. Build this crate for the wasm32-unknown-unknown target.");
}
