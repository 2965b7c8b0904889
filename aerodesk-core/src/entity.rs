/// A record kind that can live in an `EntityStore`.
///
/// The store owns ID assignment, so every entity exposes its id slot.
pub trait Entity: Clone + Send + 'static {
    /// Lowercase singular name, used in error messages and logs.
    const KIND: &'static str;

    fn id(&self) -> u64;

    fn set_id(&mut self, id: u64);
}
