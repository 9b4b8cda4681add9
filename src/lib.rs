// bookpairs: pairwise lexical similarity over a corpus of text files.
//
// This is the library root. The pipeline runs corpus -> profile -> scoring
// -> output, one module per stage.

pub mod config;
pub mod corpus;
pub mod error;
pub mod output;
pub mod profile;
pub mod scoring;
