use std::io::Write;

/// Append-only text display.
pub trait TextSurface {
    fn clear(&mut self);
    fn append(&mut self, text: &str);
}

/// Shows the currently selected date.
pub trait DateLabel {
    fn set_text(&mut self, text: &str);
}

/// Tells the user calendar access was refused.
pub trait PermissionNotice {
    fn permission_denied(&mut self);
}

pub trait ViewSurface: TextSurface + DateLabel + PermissionNotice {}

impl<T: TextSurface + DateLabel + PermissionNotice> ViewSurface for T {}

/// In-memory surface. The menu bar rebuilds its menu from this after every
/// change. Clearing also withdraws any permission notice; the view raises it
/// again on each render while access stays refused.
#[derive(Debug, Default, Clone)]
pub struct TextBuffer {
    text: String,
    label: String,
    denied: bool,
}

impl TextBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_denied(&self) -> bool {
        self.denied
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

impl TextSurface for TextBuffer {
    fn clear(&mut self) {
        self.text.clear();
        self.denied = false;
    }

    fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

impl DateLabel for TextBuffer {
    fn set_text(&mut self, text: &str) {
        self.label = text.to_string();
    }
}

impl PermissionNotice for TextBuffer {
    fn permission_denied(&mut self) {
        self.denied = true;
    }
}

/// Surface for one-shot terminal output. Text is buffered and written out by
/// [`TerminalSurface::flush_to`] once the view has settled.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    buffer: TextBuffer,
}

impl TerminalSurface {
    pub fn is_denied(&self) -> bool {
        self.buffer.is_denied()
    }

    pub fn flush_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.buffer.label())?;
        writeln!(out)?;
        if self.buffer.text().is_empty() {
            writeln!(out, "No events")?;
        } else {
            write!(out, "{}", self.buffer.text())?;
        }
        out.flush()
    }
}

impl TextSurface for TerminalSurface {
    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn append(&mut self, text: &str) {
        self.buffer.append(text);
    }
}

impl DateLabel for TerminalSurface {
    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
    }
}

impl PermissionNotice for TerminalSurface {
    fn permission_denied(&mut self) {
        self.buffer.permission_denied();
    }
}
