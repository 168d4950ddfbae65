use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Rect {
        x: usize,
        y: usize,
        w: usize,
        h: usize,
    },
    Path {
        d: String,
    },
}

/// Append-only vector drawing: a pixel-sized canvas plus an ordered element
/// list, rendered to an SVG document in insertion order.
#[derive(Debug, Clone)]
pub struct Drawing {
    pub w: usize,
    pub h: usize,
    elements: Vec<Element>,
}

impl Drawing {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            elements: Vec::new(),
        }
    }

    /// Append a black-filled rectangle with insertion point (x, y).
    pub fn add_rect(&mut self, x: usize, y: usize, w: usize, h: usize) {
        self.elements.push(Element::Rect { x, y, w, h });
    }

    /// Append a black-filled path from raw path data.
    pub fn add_path(&mut self, d: String) {
        self.elements.push(Element::Path { d });
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = String::with_capacity(128 + self.elements.len() * 48);
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
            self.w, self.h
        ));
        for el in &self.elements {
            match el {
                Element::Rect { x, y, w, h } => {
                    out.push_str(&format!(
                        "  <rect x=\"{x}\" y=\"{y}\" width=\"{w}\" height=\"{h}\" fill=\"black\"/>\n"
                    ));
                }
                Element::Path { d } => {
                    out.push_str(&format!("  <path d=\"{d}\" fill=\"black\"/>\n"));
                }
            }
        }
        out.push_str("</svg>\n");
        out
    }

    /// Persist the document at `path`.
    ///
    /// Writes to a `.tmp` sibling and renames it into place. An interrupted
    /// run leaves at worst a stale `.tmp`, never a truncated document at
    /// `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        let mut tmp_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        tmp_name.push(".tmp");
        let tmp = path.with_file_name(tmp_name);

        fs::write(&tmp, self.to_svg_string())?;
        fs::rename(&tmp, path)
    }
}
