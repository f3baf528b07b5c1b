//! Input/output collaborators: FASTA reading and emission rendering.

pub mod fasta;
pub mod report;
