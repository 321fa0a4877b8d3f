use std::cell::{RefCell, RefMut};

/// Renders comparisons into a writer (stdout, the pager or a test buffer).
pub struct Viewer {
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Viewer {
    pub fn new(writer: Box<dyn std::io::Write>) -> Self {
        Viewer {
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn flush(&self) -> anyhow::Result<()> {
        self.writer().flush()?;
        Ok(())
    }
}
