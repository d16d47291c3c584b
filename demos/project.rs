use snapshot_history::{Signal, Slot, State, UndoHistory};

#[derive(Default)]
struct Timeline {
    clips: Vec<String>,
}

impl State for Timeline {
    type Payload = String;
    type Error = &'static str;

    fn capture(&self) -> String {
        self.clips.join("\n")
    }

    fn restore(&mut self, payload: &String) -> Result<(), &'static str> {
        self.clips = payload.lines().map(String::from).collect();
        Ok(())
    }
}

impl Timeline {
    fn add(&mut self, history: &mut UndoHistory<String, impl Slot>, clip: &str) {
        history.push_state(format!("Add {clip}"), &*self);
        self.clips.push(clip.to_string());
    }
}

fn main() {
    let mut timeline = Timeline::default();
    let mut history = UndoHistory::builder()
        .max_bytes(128)
        .connect(|signal: Signal| println!("signal: {signal:?}"))
        .build();

    for clip in ["intro.mp4", "interview.mp4", "b-roll.mp4", "outro.mp4"] {
        timeline.add(&mut history, clip);
    }

    println!("Undo {}", history.undo_label());
    history
        .undo_state(&mut timeline)
        .unwrap()
        .expect("timeline payloads are always readable");
    println!("Redo {}", history.redo_label());
    println!("Clips: {:?}", timeline.clips);
    println!(
        "Using {} of {} bytes",
        history.used_bytes(),
        history.max_bytes()
    );
    println!("History:\n{}", history.display());
}
