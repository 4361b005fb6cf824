// Terminal presentation shell: renders the visible set and drives the browser
// from user input.

pub mod render;
pub mod shell;
