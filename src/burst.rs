// A burst is the particle explosion left behind by a popped bubble.
// BurstManager owns every live burst and drops them once fully faded.

use crate::audio::{self, AudioOutput};
use crate::color::Color;
use crate::particle::Particle;
use log::trace;
use rand::Rng;
use vecmath::Vector2;

#[derive(Clone, Debug)]
pub struct Burst {
    pub particles: Vec<Particle>,
}

impl Burst {
    pub const MIN_PARTICLES: usize = 15;
    pub const MAX_PARTICLES: usize = 30;

    pub fn new<R: Rng>(pos: Vector2<f64>, color: Color, rng: &mut R) -> Burst {
        let count = rng.gen_range(Burst::MIN_PARTICLES, Burst::MAX_PARTICLES);
        let particles = (0..count)
            .map(|_| Particle::random(pos, color, rng))
            .collect();
        Burst { particles }
    }

    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(|p| !p.is_finished());
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[derive(Default)]
pub struct BurstManager {
    bursts: Vec<Burst>,
}

impl BurstManager {
    pub fn new() -> Self {
        BurstManager { bursts: Vec::new() }
    }

    pub fn spawn_burst<R: Rng, A: AudioOutput + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        color: Color,
        rng: &mut R,
        audio: &mut A,
    ) {
        let burst = Burst::new([x, y], color, rng);
        trace!("burst of {} particles at ({:.1}, {:.1})", burst.particles.len(), x, y);
        self.bursts.push(burst);
        audio::cue_pop(audio);
    }

    pub fn advance(&mut self) {
        for burst in &mut self.bursts {
            burst.update();
        }
        self.bursts.retain(|b| !b.is_empty());
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.bursts.iter().flat_map(|b| b.particles.iter())
    }

    pub fn len(&self) -> usize {
        self.bursts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{AudioCall, RecordingAudio};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const GREY: Color = Color::from_u32(0xd6ccc2ff);

    #[test]
    fn burst_size_is_within_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let burst = Burst::new([0.0, 0.0], GREY, &mut rng);
            let n = burst.particles.len();
            assert!(n >= Burst::MIN_PARTICLES && n < Burst::MAX_PARTICLES, "{}", n);
            assert!(burst.particles.iter().all(|p| p.color == GREY));
        }
    }

    #[test]
    fn spawn_appends_burst_and_plays_cue_once() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut audio = RecordingAudio::loaded();
        let mut manager = BurstManager::new();
        manager.spawn_burst(100.0, 100.0, GREY, &mut rng, &mut audio);

        assert_eq!(manager.len(), 1);
        assert!(manager.particles().all(|p| p.pos == [100.0, 100.0]));
        assert_eq!(audio.calls, vec![AudioCall::Stop, AudioCall::Play]);
    }

    #[test]
    fn spawn_without_sound_still_bursts() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut audio = RecordingAudio::unloaded();
        let mut manager = BurstManager::new();
        manager.spawn_burst(0.0, 0.0, GREY, &mut rng, &mut audio);
        assert_eq!(manager.len(), 1);
        assert!(audio.calls.is_empty());
    }

    #[test]
    fn advance_fades_every_particle_by_five() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut manager = BurstManager::new();
        manager.spawn_burst(0.0, 0.0, GREY, &mut rng, &mut RecordingAudio::unloaded());
        let before = manager.particles().count();
        manager.advance();
        assert_eq!(manager.particles().count(), before);
        assert!(manager.particles().all(|p| p.lifespan == 250));
    }

    #[test]
    fn expired_particles_are_pruned_without_skipping() {
        let mut burst = Burst {
            particles: vec![
                Particle::new([0.0, 0.0], [0.0, 0.0], 2.0, GREY),
                Particle::new([0.0, 0.0], [0.0, 0.0], 2.0, GREY),
                Particle::new([0.0, 0.0], [0.0, 0.0], 2.0, GREY),
            ],
        };
        burst.particles[0].lifespan = 3;
        burst.particles[1].lifespan = 4;
        burst.particles[2].lifespan = 6;
        burst.update();
        assert_eq!(burst.particles.len(), 1);
        assert_eq!(burst.particles[0].lifespan, 1);
    }

    #[test]
    fn burst_disappears_on_the_frame_its_last_particle_expires() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut manager = BurstManager::new();
        manager.spawn_burst(0.0, 0.0, GREY, &mut rng, &mut RecordingAudio::unloaded());
        manager.spawn_burst(9.0, 9.0, GREY, &mut rng, &mut RecordingAudio::unloaded());
        for burst in &mut manager.bursts {
            for p in &mut burst.particles {
                p.lifespan = 3;
            }
        }
        manager.bursts[1].particles[0].lifespan = 255;

        manager.advance();
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.particles().count(), 1);

        for _ in 0..50 {
            manager.advance();
        }
        assert_eq!(manager.len(), 1);
        manager.advance();
        assert!(manager.is_empty());
    }
}
