use shared::Point;

#[derive(Clone, Default)]
pub struct Pointer {
    previous: Option<Box<Pointer>>,
    location: Point,
    pub button: bool,
    pub on_page: bool,
}

impl Pointer {
    pub fn new() -> Pointer {
        Pointer::default()
    }

    pub fn clicked(&self) -> bool {
        match &self.previous {
            Some(pointer) => self.button && !pointer.button,
            None => self.button,
        }
    }

    /// Whether the pointer travelled since the last frame.
    pub fn moved(&self) -> bool {
        match &self.previous {
            Some(pointer) => pointer.location != self.location,
            None => false,
        }
    }

    pub fn swap(&mut self) {
        self.previous.take(); // Must explicitly drop old Pointer from heap
        self.previous = Some(Box::new(self.clone()));
    }

    /// Clones this [`Pointer`] shifted into another origin's coordinate space.
    pub fn teleport(&self, offset: Point) -> Pointer {
        let mut returned = self.clone();

        returned.location = self.location + offset;

        returned
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    /// Whether the pointer currently rests within the given rectangle.
    pub fn over(&self, corner: Point, size: Point) -> bool {
        self.location.0 >= corner.0
            && self.location.0 < corner.0 + size.0
            && self.location.1 >= corner.1
            && self.location.1 < corner.1 + size.1
    }
}
