use std::cell::RefCell;
use std::io::{self, stdout, Write};

use crossterm::{
    style::{style, Color, Print, PrintStyledContent, Stylize},
    tty::IsTty,
    QueueableCommand,
};

/// Line-oriented text sink shared by the demos.
pub struct ConsoleDisplay {
    out: RefCell<Box<dyn Write>>,
    colored: bool,
    heading_color: Color,
}

impl ConsoleDisplay {
    pub fn new<W: Write + 'static>(writer: W, colored: bool) -> ConsoleDisplay {
        ConsoleDisplay {
            out: RefCell::new(Box::new(writer)),
            colored,
            heading_color: Color::Yellow,
        }
    }

    /// Headings are styled only when stdout is a terminal, so piped output stays plain.
    pub fn stdout() -> ConsoleDisplay {
        let out = stdout();
        let colored = out.is_tty();
        ConsoleDisplay::new(out, colored)
    }

    pub fn heading(&self, text: &str) -> io::Result<()> {
        if !self.colored {
            return self.line(text);
        }

        let styled = style(text).with(self.heading_color).bold();
        let mut console = self.out.borrow_mut();
        console.queue(PrintStyledContent(styled))?;
        console.queue(Print("\n"))?;

        Ok(())
    }

    pub fn line(&self, text: &str) -> io::Result<()> {
        writeln!(self.out.borrow_mut(), "{}", text)
    }

    pub fn blank(&self) -> io::Result<()> {
        self.line("")
    }

    pub fn flush(&self) -> io::Result<()> {
        self.out.borrow_mut().flush()
    }
}

#[cfg(test)]
pub mod testing {
    use super::ConsoleDisplay;
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    /// In-memory writer whose contents stay readable after it is handed to a display.
    #[derive(Clone, Default)]
    pub struct SharedBuffer {
        bytes: Rc<RefCell<Vec<u8>>>,
    }

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.bytes.borrow().clone()).unwrap()
        }

        pub fn lines(&self) -> Vec<String> {
            self.contents().lines().map(str::to_string).collect()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    pub fn capture() -> (Rc<ConsoleDisplay>, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (Rc::new(ConsoleDisplay::new(buffer.clone(), false)), buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{capture, SharedBuffer};
    use super::*;

    #[test]
    fn plain_output_is_one_line_per_call() {
        let (console, buffer) = capture();
        console.heading("** Title **").unwrap();
        console.line("body").unwrap();
        console.blank().unwrap();

        assert_eq!("** Title **\nbody\n\n", buffer.contents());
    }

    #[test]
    fn colored_heading_keeps_text_and_newline() {
        let buffer = SharedBuffer::default();
        let console = ConsoleDisplay::new(buffer.clone(), true);
        console.heading("styled").unwrap();
        let contents = buffer.contents();

        assert!(contents.contains("styled"));
        assert!(contents.ends_with('\n'));
    }
}
