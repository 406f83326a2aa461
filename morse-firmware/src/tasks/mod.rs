// Task-Modul: Enthält alle Embassy Tasks
//
// Der Morse-Task ist der einzige Task: seine blockierenden Pausen
// dürfen den Executor belegen.

pub mod morse;

// Re-export Tasks für einfachen Import
pub use morse::{morse_loop, morse_task};
