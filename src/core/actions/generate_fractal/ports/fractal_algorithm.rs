/// Per-pixel computation run by the band workers.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, x: u32, y: u32) -> Self::Success;
}
