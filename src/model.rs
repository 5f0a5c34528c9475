use crate::error::Result;
use crate::fast_rng::FastRng;
use crate::generator::DecayGenerator;
use crate::settings::RunSettings;
use crate::track::TrackBank;
use rand::Rng;

/// Initialize `generator` and run it for `settings.events` events.
///
/// Event `i` draws from `FastRng::for_event(seed, i)`, so the output depends
/// only on the run seed. Returns one bank of tracks per event.
pub fn generate_events<G: DecayGenerator>(
    generator: &mut G,
    settings: &RunSettings,
) -> Result<Vec<TrackBank>> {
    generator.init()?;

    let seed = settings
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen::<u64>());
    log::info!("generating {} events with seed {}", settings.events, seed);

    let mut events = Vec::with_capacity(settings.events);
    for event_index in 0..settings.events {
        let mut rng = FastRng::for_event(seed, event_index as u64);
        let mut bank = TrackBank::with_capacity(3);
        generator.read_event(&mut rng, &mut bank)?;
        events.push(bank);
    }
    Ok(events)
}
