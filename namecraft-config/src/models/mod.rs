pub mod renamer;
