//! Exercises and the circuit that owns them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pictogram id attached to an exercise. Rendering is external; the
/// core only round-trips the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    #[default]
    Dumbbell,
    Running,
    Cardio,
    Hiit,
    Yoga,
    Stretch,
    Bike,
    Swim,
    Core,
}

impl Icon {
    pub const ALL: [Icon; 9] = [
        Icon::Dumbbell,
        Icon::Running,
        Icon::Cardio,
        Icon::Hiit,
        Icon::Yoga,
        Icon::Stretch,
        Icon::Bike,
        Icon::Swim,
        Icon::Core,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Dumbbell => "dumbbell",
            Icon::Running => "running",
            Icon::Cardio => "cardio",
            Icon::Hiit => "hiit",
            Icon::Yoga => "yoga",
            Icon::Stretch => "stretch",
            Icon::Bike => "bike",
            Icon::Swim => "swim",
            Icon::Core => "core",
        }
    }
}

impl std::str::FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| format!("unknown icon '{s}'"))
    }
}

/// One exercise in the circuit.
///
/// The `id` is stable across reorders and is what run state refers to;
/// positions are transient. Duration overrides are in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub notes: String,
    /// Work override. Zero or negative input normalizes to absent.
    #[serde(default, deserialize_with = "super::config::opt_positive_secs")]
    pub custom_duration: Option<u32>,
    /// Rest override. An explicit zero is honored.
    #[serde(default, deserialize_with = "super::config::opt_secs")]
    pub custom_rest: Option<u32>,
    #[serde(default)]
    pub icon: Icon,
}

impl Exercise {
    /// New exercise with a fresh v4 id and no overrides.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            notes: String::new(),
            custom_duration: None,
            custom_rest: None,
            icon: Icon::default(),
        }
    }
}

/// Ordered exercise sequence. One pass through the circuit is a set.
///
/// The circuit owns its exercises exclusively and is addressed by stable
/// id; positions shift as the list is edited, so callers resolve an id's
/// index at the moment of use rather than caching it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Circuit {
    exercises: Vec<Exercise>,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_exercises(exercises: Vec<Exercise>) -> Self {
        Self { exercises }
    }

    /// The stock three-exercise circuit the original app seeds.
    pub fn starter() -> Self {
        let mut plank = Exercise::new("Plank");
        plank.notes = "Tight core".into();
        plank.custom_duration = Some(45);
        plank.custom_rest = Some(15);
        plank.icon = Icon::Core;

        let mut burpees = Exercise::new("Burpees");
        burpees.notes = "Explode up!".into();
        burpees.icon = Icon::Hiit;

        let mut climbers = Exercise::new("Mtn Climbers");
        climbers.notes = "Drive knees".into();
        climbers.icon = Icon::Running;

        Self {
            exercises: vec![burpees, climbers, plank],
        }
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Exercise> {
        self.exercises.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Exercise> {
        self.exercises.iter()
    }

    /// Current position of an id, if it is still in the circuit.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.exercises.iter().position(|ex| ex.id == id)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|ex| ex.id == id)
    }

    pub fn get_by_id_mut(&mut self, id: &str) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|ex| ex.id == id)
    }

    pub fn push(&mut self, exercise: Exercise) {
        self.exercises.push(exercise);
    }

    pub fn remove(&mut self, id: &str) -> Option<Exercise> {
        let index = self.index_of(id)?;
        Some(self.exercises.remove(index))
    }

    /// Move an id to a new position, clamped to the end of the list.
    pub fn move_to(&mut self, id: &str, position: usize) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let exercise = self.exercises.remove(index);
        let position = position.min(self.exercises.len());
        self.exercises.insert(position, exercise);
        true
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Exercise;
    type IntoIter = std::slice::Iter<'a, Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.exercises.iter()
    }
}
