use std::borrow::Cow;

use trajgrade_geometry::{Point, PolygonSet};

use crate::{
    ConfigurationError, EvaluateError, ScenarioConfig, ScenarioSeed, Scene, Trajectory,
    create_scene,
};

/// Whether an answer has been submitted to a [`Game`].
#[derive(Debug, Clone, Default, derive_more::IsVariant)]
pub enum AnswerState {
    #[default]
    Unset,
    Set(Trajectory),
}

/// A scene paired with at most one submitted trajectory.
///
/// Applying a new trajectory replaces the previous one together with all of
/// its cached geometry.
#[derive(Debug, Clone)]
pub struct Game {
    scene: Scene,
    answer: AnswerState,
}

impl Game {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            answer: AnswerState::Unset,
        }
    }

    /// Generates the scene from `config` and `seed`.
    pub fn from_config(
        config: &ScenarioConfig,
        seed: ScenarioSeed,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::new(create_scene(config, seed)?))
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn answer_state(&self) -> &AnswerState {
        &self.answer
    }

    /// Builds a trajectory from `points` and stores it as the answer.
    ///
    /// On error the previous answer is left untouched.
    pub fn apply_trajectory<I>(&mut self, points: I) -> Result<&Trajectory, ConfigurationError>
    where
        I: IntoIterator<Item = Point>,
    {
        let trajectory = Trajectory::new(points)?;
        Ok(self.apply_answer(trajectory))
    }

    /// Stores an already built trajectory as the answer.
    pub fn apply_answer(&mut self, trajectory: Trajectory) -> &Trajectory {
        log::debug!("applied trajectory with {} waypoints", trajectory.len());
        self.answer = AnswerState::Set(trajectory);
        let AnswerState::Set(trajectory) = &self.answer else {
            unreachable!()
        };
        trajectory
    }

    pub fn clear_answer(&mut self) {
        self.answer = AnswerState::Unset;
    }

    /// The submitted trajectory, or [`EvaluateError::InvalidState`] if none was applied.
    pub fn answer(&self) -> Result<&Trajectory, EvaluateError> {
        match &self.answer {
            AnswerState::Set(trajectory) => Ok(trajectory),
            AnswerState::Unset => Err(EvaluateError::InvalidState),
        }
    }

    /// Region swept by the submitted trajectory at the scene's agent radius.
    pub fn trajectory_union(&self) -> Result<Cow<'_, PolygonSet>, EvaluateError> {
        Ok(self.answer()?.union(self.scene.self_radius()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::from_config(&ScenarioConfig::default(), ScenarioSeed::from_u64(3)).unwrap()
    }

    #[test]
    fn test_answer_lifecycle() {
        let mut game = game();
        assert!(game.answer_state().is_unset());
        assert_eq!(game.answer().unwrap_err(), EvaluateError::InvalidState);

        game.apply_trajectory([Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
            .unwrap();
        assert!(game.answer_state().is_set());
        assert_eq!(game.answer().unwrap().len(), 2);

        game.apply_trajectory([Point::new(0.5, 0.5)]).unwrap();
        assert_eq!(game.answer().unwrap().points(), &[Point::new(0.5, 0.5)]);

        game.clear_answer();
        assert!(game.answer().is_err());
    }

    #[test]
    fn test_invalid_trajectory_keeps_previous_answer() {
        let mut game = game();
        game.apply_trajectory([Point::new(0.1, 0.1)]).unwrap();
        assert_eq!(
            game.apply_trajectory([]).unwrap_err(),
            ConfigurationError::EmptyTrajectory
        );
        assert_eq!(game.answer().unwrap().points(), &[Point::new(0.1, 0.1)]);
    }

    #[test]
    fn test_trajectory_union_requires_answer() {
        let mut game = game();
        assert!(game.trajectory_union().is_err());
        game.apply_trajectory([Point::new(0.2, 0.2), Point::new(0.4, 0.2)])
            .unwrap();
        let union = game.trajectory_union().unwrap();
        assert_eq!(union.len(), 1);
        assert!(union.area() > 0.2 * 2.0 * game.scene().self_radius());
    }

    #[test]
    fn test_same_seed_same_game() {
        assert_eq!(game().scene().obstacles(), game().scene().obstacles());
    }
}
