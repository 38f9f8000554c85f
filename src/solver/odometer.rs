/// Mixed-radix counter over digit vectors, last digit fastest.
///
/// Yields every vector `d` with `d[k] < radices[k]`, in lexicographic
/// order. No radices yields one empty vector; a zero radix yields nothing.
#[derive(Debug, Clone)]
pub struct Odometer {
    radices: Vec<usize>,
    digits: Option<Vec<usize>>,
}

impl Odometer {
    pub fn new(radices: Vec<usize>) -> Self {
        let digits = radices
            .iter()
            .all(|r| *r > 0)
            .then(|| vec![0; radices.len()]);
        Self { radices, digits }
    }
    /// Number of vectors the odometer yields in total.
    pub fn size(radices: &[usize]) -> usize {
        radices.iter().product()
    }
    fn advance(&mut self) {
        let Some(digits) = self.digits.as_mut() else {
            return;
        };
        for k in (0..digits.len()).rev() {
            digits[k] += 1;
            if digits[k] < self.radices[k] {
                return;
            }
            digits[k] = 0;
        }
        self.digits = None;
    }
}

impl Iterator for Odometer {
    type Item = Vec<usize>;
    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.digits.clone()?;
        self.advance();
        Some(current)
    }
}
