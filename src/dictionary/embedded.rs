//! Built-in word list
//!
//! `DICTIONARY` and `DICTIONARY_COUNT` are generated by the build script
//! from `data/dictionary.txt`.

include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
