/// Iterates the storage offsets of a strided layout in row-major logical order.
///
/// Works like an odometer: the last coordinate moves fastest, and the running
/// offset is updated incrementally instead of recomputing a dot product.
#[derive(Debug)]
pub struct StridedOffsets<'a> {
    shape: &'a [usize],
    strides: &'a [usize],
    coords: Vec<usize>,
    current: usize,
    remaining: usize,
}

impl<'a> StridedOffsets<'a> {
    pub fn new(shape: &'a [usize], strides: &'a [usize], offset: usize) -> Self {
        StridedOffsets {
            shape,
            strides,
            coords: vec![0; shape.len()],
            current: offset,
            remaining: shape.iter().product(),
        }
    }
}

impl Iterator for StridedOffsets<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let result = self.current;
        self.remaining -= 1;
        if self.remaining > 0 {
            for dim in (0..self.shape.len()).rev() {
                self.coords[dim] += 1;
                self.current += self.strides[dim];
                if self.coords[dim] < self.shape[dim] {
                    break;
                }
                self.current -= self.strides[dim] * self.shape[dim];
                self.coords[dim] = 0;
            }
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Iterates every coordinate of `shape` in row-major order.
#[derive(Debug)]
pub struct CoordIter {
    shape: Vec<usize>,
    next: Option<Vec<usize>>,
}

impl CoordIter {
    pub fn new(shape: &[usize]) -> Self {
        let next = if shape.iter().any(|&s| s == 0) {
            None
        } else {
            Some(vec![0; shape.len()])
        };
        CoordIter {
            shape: shape.to_vec(),
            next,
        }
    }
}

impl Iterator for CoordIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let mut following = current.clone();
        let mut advanced = false;
        for dim in (0..self.shape.len()).rev() {
            following[dim] += 1;
            if following[dim] < self.shape[dim] {
                advanced = true;
                break;
            }
            following[dim] = 0;
        }
        if advanced {
            self.next = Some(following);
        }
        Some(current)
    }
}
