use crate::Payload;

/// A document that can capture itself into a payload and be restored from one.
///
/// The history is agnostic of the payload format, it is up to the document
/// to decide how it serializes itself.
///
/// # Examples
/// ```
/// # use snapshot_history::{State, UndoHistory};
/// #[derive(Default)]
/// struct Timeline {
///     clips: Vec<String>,
/// }
///
/// impl State for Timeline {
///     type Payload = String;
///     type Error = &'static str;
///
///     fn capture(&self) -> String {
///         self.clips.join("\n")
///     }
///
///     fn restore(&mut self, payload: &String) -> Result<(), &'static str> {
///         self.clips = payload.lines().map(String::from).collect();
///         Ok(())
///     }
/// }
///
/// let mut timeline = Timeline::default();
/// let mut history = UndoHistory::default();
///
/// history.push_state("Add clip", &timeline);
/// timeline.clips.push(String::from("intro.mp4"));
/// history.push_state("Add clip", &timeline);
/// timeline.clips.push(String::from("outro.mp4"));
///
/// history.undo_state(&mut timeline).unwrap().unwrap();
/// assert_eq!(timeline.clips, ["intro.mp4"]);
/// history.undo_state(&mut timeline).unwrap().unwrap();
/// assert!(timeline.clips.is_empty());
/// history.redo_state(&mut timeline).unwrap().unwrap();
/// history.redo_state(&mut timeline).unwrap().unwrap();
/// assert_eq!(timeline.clips, ["intro.mp4", "outro.mp4"]);
/// ```
pub trait State {
    /// The serialized form of the document.
    type Payload: Payload;
    /// The error returned when a payload can not be restored.
    type Error;

    /// Serializes the whole document.
    fn capture(&self) -> Self::Payload;

    /// Replaces the document with the state held by `payload`.
    fn restore(&mut self, payload: &Self::Payload) -> Result<(), Self::Error>;
}
