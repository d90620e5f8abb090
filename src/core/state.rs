use log::debug;
use slotmap::{SlotMap, new_key_type};

use super::event::{CpuSlot, TimelineEntry};
use crate::sim::job::{Process, ProcessInstance};

pub type Ticks = u64;
pub type ProcessId = u32;
new_key_type! {
    pub struct ProcKey;
}

/// Simulation state shared by every policy: the clock, the process arena, the
/// arrival cursor and the raw (unmerged) timeline.
#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub procs: SlotMap<ProcKey, ProcessInstance>,

    // Caller order, used for output and tie-breaks
    order: Vec<ProcKey>,
    // Sorted by (arrival_time, order); everything before the cursor is admitted
    arrivals: Vec<ProcKey>,
    arrival_cursor: usize,
    raw: Vec<TimelineEntry>,
    completed: usize,
}

impl SimCtx {
    pub fn new(processes: &[Process]) -> Self {
        let mut procs = SlotMap::with_capacity_and_key(processes.len());
        let order: Vec<ProcKey> = processes
            .iter()
            .enumerate()
            .map(|(index, process)| procs.insert(ProcessInstance::new(*process, index)))
            .collect();

        let mut arrivals = order.clone();
        // Stable, so equal arrivals keep caller order
        arrivals.sort_by_key(|&key| procs[key].process.arrival_time);

        let now = arrivals
            .first()
            .map_or(0, |&key| procs[key].process.arrival_time);

        Self {
            now,
            procs,
            order,
            arrivals,
            arrival_cursor: 0,
            raw: Vec::new(),
            completed: 0,
        }
    }

    pub fn process(&self, key: ProcKey) -> &ProcessInstance {
        &self.procs[key]
    }

    pub fn process_mut(&mut self, key: ProcKey) -> &mut ProcessInstance {
        &mut self.procs[key]
    }

    /// Processes in the order the caller supplied them.
    pub fn instances(&self) -> impl Iterator<Item = &ProcessInstance> {
        self.order.iter().map(|&key| &self.procs[key])
    }

    pub fn raw_timeline(&self) -> &[TimelineEntry] {
        &self.raw
    }

    pub fn all_completed(&self) -> bool {
        self.completed == self.procs.len()
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    /// Admit every process that has arrived by `now`, in arrival order.
    pub fn admit_arrivals(&mut self) -> Vec<ProcKey> {
        let now = self.now;
        let admitted: Vec<ProcKey> = self.arrivals[self.arrival_cursor..]
            .iter()
            .copied()
            .take_while(|&key| self.procs[key].process.arrival_time <= now) // Contiguous, since arrivals are sorted
            .collect();

        self.arrival_cursor += admitted.len();
        admitted
    }

    /// Arrival time of the next process not yet admitted.
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.arrivals
            .get(self.arrival_cursor)
            .map(|&key| self.procs[key].process.arrival_time)
    }

    /// Fast-forward an idle CPU to the next arrival. Idle time is not recorded
    /// on the timeline. Returns false when nothing is left to arrive.
    pub fn idle_until_next_arrival(&mut self) -> bool {
        match self.next_arrival() {
            Some(at) => {
                debug!("t={} cpu idle until {}", self.now, at);
                self.now = self.now.max(at);
                true
            }
            None => false,
        }
    }

    /// Run `key` for `slice` ticks starting at `now`.
    pub fn dispatch(&mut self, key: ProcKey, slice: Ticks) {
        let start = self.now;
        let proc = &mut self.procs[key];
        debug_assert!(
            proc.completion_time.is_none(),
            "Completed process {} dispatched again",
            proc.process.id
        );
        debug_assert!(
            slice <= proc.remaining_time,
            "Slice {slice} exceeds remaining time of process {}",
            proc.process.id
        );

        proc.start_time.get_or_insert(start);
        proc.remaining_time = proc.remaining_time.saturating_sub(slice);
        let id = proc.process.id;

        self.advance_time(slice);
        debug!("t={start} run P{id} for {slice}");
        self.record(CpuSlot::Process(id), start);
    }

    /// Occupy the CPU with a context switch of `len` ticks.
    pub fn context_switch(&mut self, len: Ticks) {
        let start = self.now;
        self.advance_time(len);
        debug!("t={start} context switch for {len}");
        self.record(CpuSlot::ContextSwitch, start);
    }

    pub fn mark_completed(&mut self, key: ProcKey) {
        let now = self.now;
        let proc = &mut self.procs[key];
        debug_assert_eq!(
            proc.remaining_time, 0,
            "Process {} completed with work left",
            proc.process.id
        );
        debug_assert!(
            proc.completion_time.is_none(),
            "Process {} completed twice",
            proc.process.id
        );

        proc.completion_time = Some(now);
        self.completed += 1;
        debug!("t={now} P{} completed", proc.process.id);
    }

    // Zero-length intervals are never recorded
    fn record(&mut self, slot: CpuSlot, start: Ticks) {
        if self.now > start {
            self.raw.push(TimelineEntry {
                slot,
                start_time: start,
                end_time: self.now,
            });
        }
    }
}
