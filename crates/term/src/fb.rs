//! Framebuffer for the virtual terminal.

/// 2D grid of character cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![' '; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, ' ');
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Copy another framebuffer of the same size without reallocating.
    pub fn copy_from(&mut self, other: &FrameBuffer) {
        self.resize(other.width, other.height);
        self.cells.copy_from_slice(&other.cells);
    }

    /// Write `s` starting at (x, y), clipped at the right edge.
    ///
    /// Returns the number of columns the text occupied, clipped or not.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            self.set(cx, y, ch);
            cx = cx.saturating_add(1);
        }
        cx - x
    }

    /// Write `n` in decimal without allocating. Returns the digit count.
    pub fn put_u64(&mut self, x: u16, y: u16, n: u64) -> u16 {
        let mut digits = [0u8; 20];
        let mut len = 0;
        let mut rest = n;
        loop {
            digits[len] = b'0' + (rest % 10) as u8;
            len += 1;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }

        let mut cx = x;
        for &d in digits[..len].iter().rev() {
            self.set(cx, y, d as char);
            cx = cx.saturating_add(1);
        }
        len as u16
    }

    /// Text of one row, trailing spaces included
    pub fn row_text(&self, y: u16) -> String {
        match self.idx(0, y) {
            Some(start) => self.cells[start..start + self.width as usize].iter().collect(),
            None => String::new(),
        }
    }

    /// The whole screen as newline-separated rows
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for y in 0..self.height {
            out.push_str(&self.row_text(y));
            out.push('\n');
        }
        out
    }
}
