//! Pattern 8: Decorator
//! Example: A writer that logs line counts, wrapping any other writer
//!
//! Run with: cargo run --bin p08_decorator_file

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// Wraps any writer. `writelines` adds the logging; every plain `write`
/// passes straight through to the wrapped writer, so the decorated value
/// still works anywhere a writer is expected.
pub struct FileWithLogging<W: Write> {
    file: W,
}

impl<W: Write> FileWithLogging<W> {
    pub fn new(file: W) -> Self {
        FileWithLogging { file }
    }

    pub fn writelines(&mut self, lines: &[&str]) -> io::Result<()> {
        for line in lines {
            writeln!(self.file, "{}", line)?;
        }
        println!("Wrote {} lines", lines.len());
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.file
    }
}

impl<W: Write> Write for FileWithLogging<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn main() -> io::Result<()> {
    let mut file = FileWithLogging::new(File::create("hello_world.txt")?);
    file.writelines(&["Hey", "Amitabh"])?;
    file.flush()?;
    drop(file);

    let reader = BufReader::new(File::open("hello_world.txt")?);
    for line in reader.lines() {
        println!("{}", line?);
    }
    Ok(())
}
