//! Demo content engine
//!
//! Synthetic people, tasks, weather and family events shown while demo
//! mode is active. Content is rebuilt from a fixed seed on every entry.

use core::fmt::Write;

use heapless::{String, Vec};
use rand_core::RngCore;

use super::palette::{Pattern, Rgb565, PALETTE};
use crate::config::{DISPLAYS_PER_ROW, TASK_LED_COUNT};

/// People in the demo
pub const DEMO_PERSON_COUNT: usize = 2;

/// Tasks each demo person can hold
pub const MAX_TASKS_PER_PERSON: usize = 6;

/// Family events in the demo
pub const MAX_FAMILY_EVENTS: usize = 4;

/// Animation phase wraps at this value
pub const ANIMATION_PHASES: u8 = 100;

/// Chance (percent) that the colour cycle reverses on a tick
pub const DIRECTION_FLIP_PERCENT: u32 = 10;

/// Tasks completed right after the content is seeded, as (person, task)
pub const SEEDED_COMPLETE: [(usize, usize); 3] = [(0, 0), (0, 2), (1, 1)];

/// Task urgency, 1 is most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Priority {
    High = 1,
    Medium = 2,
    Low = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoTask {
    pub name: &'static str,
    pub description: &'static str,
    pub colour: Rgb565,
    pub icon: Pattern,
    pub priority: Priority,
    completed: bool,
    completed_at_ms: u64,
}

impl DemoTask {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        colour: Rgb565,
        icon: Pattern,
        priority: Priority,
    ) -> Self {
        Self {
            name,
            description,
            colour,
            icon,
            priority,
            completed: false,
            completed_at_ms: 0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// When the task was completed; 0 while incomplete
    pub fn completed_at_ms(&self) -> u64 {
        self.completed_at_ms
    }

    fn complete(&mut self, now_ms: u64) {
        if !self.completed {
            self.completed = true;
            self.completed_at_ms = now_ms;
        }
    }

    fn reset(&mut self) {
        self.completed = false;
        self.completed_at_ms = 0;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoPerson {
    pub name: &'static str,
    pub theme: Rgb565,
    pub avatar: Pattern,
    tasks: Vec<DemoTask, MAX_TASKS_PER_PERSON>,
}

impl DemoPerson {
    /// A person with no tasks yet
    pub fn new(name: &'static str, theme: Rgb565, avatar: Pattern) -> Self {
        Self {
            name,
            theme,
            avatar,
            tasks: Vec::new(),
        }
    }

    /// Add a task; false once the person is full
    pub fn push_task(&mut self, task: DemoTask) -> bool {
        self.tasks.push(task).is_ok()
    }

    pub fn tasks(&self) -> &[DemoTask] {
        &self.tasks
    }

    pub fn task(&self, index: usize) -> Option<&DemoTask> {
        self.tasks.get(index)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    /// Share of tasks done, 0.0 to 100.0; 0.0 with no tasks
    pub fn completion_percentage(&self) -> f32 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        self.completed_count() as f32 * 100.0 / total as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoWeather {
    pub condition: &'static str,
    pub temperature_c: i8,
    pub colour: Rgb565,
    pub icon: Pattern,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FamilyEvent {
    pub name: &'static str,
    pub time: &'static str,
    pub colour: Rgb565,
    pub icon: Pattern,
    /// Event is happening today
    pub active: bool,
}

/// Per-person summary line, e.g. "3/6 tasks done"
pub type TaskSummary = String<24>;

fn person(
    name: &'static str,
    theme: Rgb565,
    avatar: Pattern,
    tasks: [DemoTask; MAX_TASKS_PER_PERSON],
) -> DemoPerson {
    let mut person = DemoPerson::new(name, theme, avatar);
    for task in tasks {
        person.push_task(task);
    }
    person
}

fn seed_people() -> [DemoPerson; DEMO_PERSON_COUNT] {
    use Pattern::*;
    use Priority::*;

    [
        person(
            "Emma",
            Rgb565::BLUE,
            Star,
            [
                DemoTask::new("Make Bed", "Make your bed neat & tidy", Rgb565::PURPLE, Heart, Medium),
                DemoTask::new("Brush Teeth", "Brush for 2 minutes", Rgb565::CYAN, Circle, High),
                DemoTask::new("Feed Fluffy", "Fill cat food & water", Rgb565::ORANGE, Flower, High),
                DemoTask::new("Tidy Room", "Put toys away neatly", Rgb565::GREEN, Square, Medium),
                DemoTask::new("Piano Practice", "30 minutes practice", Rgb565::PINK, Music, Low),
                DemoTask::new("Read Book", "Read for 20 minutes", Rgb565::GOLD, Book, Low),
            ],
        ),
        person(
            "Jack",
            Rgb565::GREEN,
            Triangle,
            [
                DemoTask::new("Make Bed", "Make your bed nice", Rgb565::RED, Diamond, Medium),
                DemoTask::new("Brush Teeth", "Clean teeth well", Rgb565::BLUE, Cross, High),
                DemoTask::new("Feed Goldfish", "Give fish food", Rgb565::YELLOW, Circle, High),
                DemoTask::new("Homework", "Complete maths work", Rgb565::PURPLE, Book, High),
                DemoTask::new("Football Practice", "Kick ball outside", Rgb565::LIME, Sport, Low),
                DemoTask::new("Help Cook", "Assist with dinner", Rgb565::ORANGE, Heart, Medium),
            ],
        ),
    ]
}

const SEED_WEATHER: DemoWeather = DemoWeather {
    condition: "Partly Cloudy",
    temperature_c: 22,
    colour: Rgb565::CYAN,
    icon: Pattern::Cloud,
    description: "Perfect day for outdoor activities!",
};

const SEED_EVENTS: [FamilyEvent; MAX_FAMILY_EVENTS] = [
    FamilyEvent {
        name: "Swimming Lesson",
        time: "3:00 PM",
        colour: Rgb565::BLUE,
        icon: Pattern::Sport,
        active: true,
    },
    FamilyEvent {
        name: "Pizza Night",
        time: "6:00 PM",
        colour: Rgb565::RED,
        icon: Pattern::Heart,
        active: true,
    },
    FamilyEvent {
        name: "Movie Time",
        time: "7:30 PM",
        colour: Rgb565::PURPLE,
        icon: Pattern::Star,
        active: false,
    },
    FamilyEvent {
        name: "Bedtime Story",
        time: "8:30 PM",
        colour: Rgb565::GOLD,
        icon: Pattern::Book,
        active: false,
    },
];

/// All demo content plus its animation state
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoContent {
    people: [DemoPerson; DEMO_PERSON_COUNT],
    weather: DemoWeather,
    events: [FamilyEvent; MAX_FAMILY_EVENTS],
    animation_phase: u8,
    colour_index: usize,
    forward: bool,
}

impl Default for DemoContent {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoContent {
    /// Fresh content, every task incomplete
    pub fn new() -> Self {
        Self {
            people: seed_people(),
            weather: SEED_WEATHER,
            events: SEED_EVENTS,
            animation_phase: 0,
            colour_index: 0,
            forward: true,
        }
    }

    /// Back to fresh content
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Fresh content with the seeded tasks already done
    pub fn seed(&mut self, now_ms: u64) {
        self.reset();
        for (person, task) in SEEDED_COMPLETE {
            self.complete_task(person, task, now_ms);
        }
    }

    fn task_mut(&mut self, person: usize, task: usize) -> Option<&mut DemoTask> {
        self.people.get_mut(person)?.tasks.get_mut(task)
    }

    /// Flip a task; no-op for indices out of range
    pub fn toggle_task(&mut self, person: usize, task: usize, now_ms: u64) {
        if let Some(task) = self.task_mut(person, task) {
            if task.completed {
                task.reset();
            } else {
                task.complete(now_ms);
            }
        }
    }

    /// Mark a task done, keeping the first completion time
    pub fn complete_task(&mut self, person: usize, task: usize, now_ms: u64) {
        if let Some(task) = self.task_mut(person, task) {
            task.complete(now_ms);
        }
    }

    pub fn reset_task(&mut self, person: usize, task: usize) {
        if let Some(task) = self.task_mut(person, task) {
            task.reset();
        }
    }

    pub fn person(&self, person: usize) -> Option<&DemoPerson> {
        self.people.get(person)
    }

    pub fn people(&self) -> &[DemoPerson] {
        &self.people
    }

    pub fn weather(&self) -> &DemoWeather {
        &self.weather
    }

    pub fn family_events(&self) -> &[FamilyEvent] {
        &self.events
    }

    /// 0 for an invalid person
    pub fn completed_count(&self, person: usize) -> usize {
        self.person(person).map_or(0, DemoPerson::completed_count)
    }

    /// 0 for an invalid person
    pub fn total_count(&self, person: usize) -> usize {
        self.person(person).map_or(0, DemoPerson::total_count)
    }

    /// 0.0 for an invalid person or one with no tasks
    pub fn completion_percentage(&self, person: usize) -> f32 {
        self.person(person)
            .map_or(0.0, DemoPerson::completion_percentage)
    }

    pub fn task_summary(&self, person: usize) -> TaskSummary {
        let mut line = TaskSummary::new();
        match self.person(person) {
            Some(p) => {
                let _ = write!(line, "{}/{} tasks done", p.completed_count(), p.total_count());
            }
            None => {
                let _ = line.push_str("Invalid person");
            }
        }
        line
    }

    /// Demo task shown on output channel `channel`
    ///
    /// Each row of channels belongs to one person; the channel's position
    /// in the row picks the task.
    pub fn task_for_channel(&self, channel: usize) -> Option<&DemoTask> {
        if channel >= TASK_LED_COUNT {
            return None;
        }
        self.person(channel / DISPLAYS_PER_ROW)?
            .task(channel % DISPLAYS_PER_ROW)
    }

    /// Whether channel `channel` should show its task as done
    pub fn channel_completed(&self, channel: usize) -> bool {
        self.task_for_channel(channel)
            .is_some_and(DemoTask::is_completed)
    }

    /// Advance the animation by one tick
    ///
    /// Moves the colour cycle one step and reverses its direction with a
    /// small random chance.
    pub fn animate<R: RngCore>(&mut self, rng: &mut R) {
        self.animation_phase = (self.animation_phase + 1) % ANIMATION_PHASES;

        let len = PALETTE.len();
        self.colour_index = if self.forward {
            (self.colour_index + 1) % len
        } else {
            (self.colour_index + len - 1) % len
        };

        if rng.next_u32() % 100 < DIRECTION_FLIP_PERCENT {
            self.forward = !self.forward;
        }
    }

    pub fn animation_phase(&self) -> u8 {
        self.animation_phase
    }

    pub fn colour_index(&self) -> usize {
        self.colour_index
    }

    pub fn is_cycling_forward(&self) -> bool {
        self.forward
    }

    /// Colour the animation is currently on
    pub fn theme_colour(&self) -> Rgb565 {
        PALETTE[self.colour_index % PALETTE.len()]
    }
}
