use farmstead_core::{ActionRecord, EntityId, FarmEntity};
use farmstead_crops::Crop;
use farmstead_livestock::Animal;

/// Anything the farm can hold: the closed set of entity variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Animal(Animal),
    Crop(Crop),
}

impl Entity {
    pub fn as_animal(&self) -> Option<&Animal> {
        match self {
            Entity::Animal(a) => Some(a),
            Entity::Crop(_) => None,
        }
    }

    pub fn as_crop(&self) -> Option<&Crop> {
        match self {
            Entity::Crop(c) => Some(c),
            Entity::Animal(_) => None,
        }
    }

    fn inner(&self) -> &dyn FarmEntity {
        match self {
            Entity::Animal(a) => a as &dyn FarmEntity,
            Entity::Crop(c) => c,
        }
    }
}

impl FarmEntity for Entity {
    fn id(&self) -> EntityId {
        self.inner().id()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn history(&self) -> &[ActionRecord] {
        self.inner().history()
    }

    fn status(&self) -> String {
        self.inner().status()
    }
}

impl From<Animal> for Entity {
    fn from(value: Animal) -> Self {
        Entity::Animal(value)
    }
}

impl From<Crop> for Entity {
    fn from(value: Crop) -> Self {
        Entity::Crop(value)
    }
}
