use std::fmt;

/// Board output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    TopCopper,
    BottomCopper,
    TopSilk,
    Outline,
}

impl Layer {
    /// Conventional gerber suffix for the layer.
    #[must_use]
    pub fn gerber(&self) -> &'static str {
        match self {
            Layer::TopCopper => "GTL",
            Layer::BottomCopper => "GBL",
            Layer::TopSilk => "GTO",
            Layer::Outline => "GML",
        }
    }

    /// Every layer, in stackup order.
    #[must_use]
    pub fn all() -> [Layer; 4] {
        [
            Layer::TopSilk,
            Layer::TopCopper,
            Layer::BottomCopper,
            Layer::Outline,
        ]
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gerber())
    }
}
