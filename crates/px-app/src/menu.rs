//! Interactive face/slice prompt for `cubo-rgb`.
//!
//! The loop is a small state machine over any `BufRead`/`Write` pair, so it
//! runs the same against a terminal or an in-memory script.

use std::io::{self, BufRead, Write};

use px_source::Face;
use px_source::procedural::FACE_INFO;
use thiserror::Error;

/// Word that ends the session at either prompt (case-insensitive).
pub const EXIT_WORD: &str = "sair";

/// Rejected menu input. The message is shown after `[ERRO]`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Entrada inválida. Por favor, digite um número inteiro.")]
    NotAnInteger(String),

    #[error("O número da face deve ser um inteiro entre 1 e 6.")]
    FaceOutOfRange(i64),

    #[error("O índice da fatia deve ser um inteiro entre 0 e 255.")]
    SliceOutOfRange(i64),
}

/// Parse a whole line as a base-10 integer, ignoring surrounding blanks.
///
/// # Errors
/// Returns [`InputError::NotAnInteger`] for anything else.
///
/// # Example
/// ```
/// use px_app::menu::parse_int;
/// assert_eq!(parse_int(" 42\n"), Ok(42));
/// assert!(parse_int("4.2").is_err());
/// ```
pub fn parse_int(line: &str) -> Result<i64, InputError> {
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::NotAnInteger(trimmed.to_string()))
}

/// # Errors
/// Returns [`InputError::FaceOutOfRange`] outside 1..=6.
pub fn validate_face(n: i64) -> Result<Face, InputError> {
    Face::from_index(n).map_err(|_| InputError::FaceOutOfRange(n))
}

/// # Errors
/// Returns [`InputError::SliceOutOfRange`] outside 0..=255.
pub fn validate_slice(n: i64) -> Result<u8, InputError> {
    u8::try_from(n).map_err(|_| InputError::SliceOutOfRange(n))
}

/// One validated render request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceRequest {
    pub face: Face,
    pub slice: u8,
}

/// Where the prompt loop currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    /// Menu shown, waiting for a face number.
    AwaitFace,
    /// Face accepted, waiting for the slice index.
    AwaitSliceIndex { face: Face },
    /// Both values accepted; the caller renders and the loop restarts.
    Render { face: Face, slice: u8 },
    /// Sentinel typed or input exhausted.
    Exit,
}

/// Prompt loop bound to an input and an output stream.
pub struct MenuSession<R, W> {
    input: R,
    output: W,
    state: MenuState,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            state: MenuState::AwaitFace,
        }
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Writer shared with the caller, for messages between requests.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run transitions until the next render request or the end of the
    /// session. Once `None` is returned every later call returns `None`.
    ///
    /// # Errors
    /// Propagates I/O errors from either stream.
    pub fn next_request(&mut self) -> io::Result<Option<SliceRequest>> {
        if let MenuState::Render { .. } = self.state {
            self.state = MenuState::AwaitFace;
        }
        loop {
            match self.step()? {
                MenuState::Render { face, slice } => return Ok(Some(SliceRequest { face, slice })),
                MenuState::Exit => return Ok(None),
                _ => {}
            }
        }
    }

    /// Perform a single transition and return the new state.
    ///
    /// # Errors
    /// Propagates I/O errors from either stream.
    pub fn step(&mut self) -> io::Result<MenuState> {
        self.state = match self.state {
            MenuState::AwaitFace => {
                self.print_menu()?;
                match self.prompt("Escolha o número da face (1-6): ")? {
                    None => MenuState::Exit,
                    Some(line) => match parse_int(&line).and_then(validate_face) {
                        Ok(face) => MenuState::AwaitSliceIndex { face },
                        Err(e) => self.reject(&e)?,
                    },
                }
            }
            MenuState::AwaitSliceIndex { face } => {
                let question = format!("Agora, digite o índice da fatia para a face {face} (0-255): ");
                match self.prompt(&question)? {
                    None => MenuState::Exit,
                    Some(line) => match parse_int(&line).and_then(validate_slice) {
                        Ok(slice) => MenuState::Render { face, slice },
                        Err(e) => self.reject(&e)?,
                    },
                }
            }
            MenuState::Render { .. } => MenuState::AwaitFace,
            MenuState::Exit => MenuState::Exit,
        };
        Ok(self.state)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n-------------------- MENU --------------------")?;
        writeln!(self.output, "Qual face do cubo você deseja fatiar?")?;
        for info in &FACE_INFO {
            writeln!(self.output, "  Face {}: {}", info.face, info.name)?;
        }
        writeln!(self.output, "\nDigite '{EXIT_WORD}' a qualquer momento para terminar o programa.")
    }

    /// Show `question` and read one line. `None` on end of input or on the
    /// exit word.
    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::debug!("fim da entrada");
            writeln!(self.output)?;
            return Ok(None);
        }
        if line.trim().eq_ignore_ascii_case(EXIT_WORD) {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn reject(&mut self, err: &InputError) -> io::Result<MenuState> {
        log::debug!("entrada rejeitada: {err:?}");
        writeln!(self.output, "\n[ERRO] {err} Tente novamente.")?;
        Ok(MenuState::AwaitFace)
    }
}
