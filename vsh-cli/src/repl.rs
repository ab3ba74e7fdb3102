// SPDX-License-Identifier: AGPL-3.0-or-later
//! Interactive prompt loop

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::io::{self, Write};
use vsh_core::{VshError, VshResult};

use crate::shell::{Control, Shell};

/// Read and execute lines until `exit`, Ctrl-C or end of input. The session
/// log is written on every way out.
pub fn run(shell: &mut Shell) -> VshResult<()> {
    let mut rl: Editor<(), DefaultHistory> = Editor::new().map_err(readline_error)?;
    let mut stdout = io::stdout();

    loop {
        match rl.readline(&shell.prompt()) {
            Ok(line) => {
                if shell.run_line(&line, &mut stdout)? == Control::Exit {
                    return Ok(());
                }
            }
            Err(ReadlineError::Interrupted) => {
                let newline = writeln!(stdout);
                shell.finish()?;
                return newline.map_err(Into::into);
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                shell.finish()?;
                return Err(readline_error(err));
            }
        }
    }

    shell.finish()
}

fn readline_error(err: ReadlineError) -> VshError {
    match err {
        ReadlineError::Io(e) => VshError::Io(e),
        other => VshError::Io(io::Error::new(io::ErrorKind::Other, other.to_string())),
    }
}
