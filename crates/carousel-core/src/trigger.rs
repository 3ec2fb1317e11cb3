use smallvec::SmallVec;

/// Where the scroll position sits relative to the gate band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    Before,
    Inside,
    After,
}

/// Boundary crossings reported by [`ScrollGate::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateEvent {
    /// Scrolled down across the start boundary.
    Enter,
    /// Scrolled down across the end boundary.
    Leave,
    /// Scrolled up across the end boundary.
    EnterBack,
    /// Scrolled up across the start boundary.
    LeaveBack,
}

/// A single scroll update can jump the whole band and cross both
/// boundaries at once.
pub type GateEvents = SmallVec<[GateEvent; 2]>;

/// Watches a scroll position against a `[start, end]` band in document
/// space and reports boundary crossings in the order they were passed.
#[derive(Clone, Copy, Debug)]
pub struct ScrollGate {
    start: f64,
    end: f64,
    zone: Zone,
}

impl ScrollGate {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end: end.max(start),
            zone: Zone::Before,
        }
    }

    fn zone_for(&self, scroll_y: f64) -> Zone {
        if scroll_y < self.start {
            Zone::Before
        } else if scroll_y < self.end {
            Zone::Inside
        } else {
            Zone::After
        }
    }

    pub fn update(&mut self, scroll_y: f64) -> GateEvents {
        let old = self.zone;
        let new = self.zone_for(scroll_y);
        self.zone = new;
        let mut events = GateEvents::new();
        match (old, new) {
            (Zone::Before, Zone::Inside) => events.push(GateEvent::Enter),
            (Zone::Before, Zone::After) => {
                events.push(GateEvent::Enter);
                events.push(GateEvent::Leave);
            }
            (Zone::Inside, Zone::After) => events.push(GateEvent::Leave),
            (Zone::Inside, Zone::Before) => events.push(GateEvent::LeaveBack),
            (Zone::After, Zone::Inside) => events.push(GateEvent::EnterBack),
            (Zone::After, Zone::Before) => {
                events.push(GateEvent::EnterBack);
                events.push(GateEvent::LeaveBack);
            }
            _ => {}
        }
        events
    }
}
