use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    Empty,
    #[error("slide {index} out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },
}

/// Cycles an index over `len` slides. The index always points at an
/// existing slide and wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    direction: Direction,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            len,
            current: 0,
            direction: Direction::Forward,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next(&mut self) {
        self.direction = Direction::Forward;
        self.current = (self.current + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.direction = Direction::Backward;
        self.current = (self.current + self.len - 1) % self.len;
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index;
        Ok(())
    }
}
