// Thu Oct 15 2026 - Alex

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Destructor {
    pub body: String,
    pub is_virtual: bool,
}

impl Destructor {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            is_virtual: false,
        }
    }

    pub fn with_virtual(&mut self) -> &mut Self {
        self.is_virtual = true;
        self
    }
}
