// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with some content.\n\n```example-good\nfn good() {}\n```\n\n```EXAMPLE-BAD extra\nfn bad( {}\n```\n\n```rust\nfn plain() {}\n```\n\n  ```interactive-example-2\n  > run\n  ```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_unterminated_tail(size: usize) -> String {
    let mut content = generate_markdown_content(size);
    content.push_str("```example-good\nnever closed\n");
    content
}
