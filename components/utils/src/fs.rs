use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;

use std::path::Path;

pub fn read_string<P: AsRef<Path>>(input: P) -> io::Result<String> {
    let file = File::open(input)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}
