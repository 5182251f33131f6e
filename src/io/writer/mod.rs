/*!
# Atomic file writing

[TextWriter] writes into a temporary file created in the destination directory.
The temporary file is renamed onto the destination by [TextWriter::finish], and removed if the writer is dropped before that.
[TextWriter::seal] splits this in two, so that several outputs can be completed before any of them is published.
A failed run therefore never leaves a truncated file under the destination name.
!*/
mod textwriter;

pub use textwriter::{SealedFile, TextWriter};
