use std::time::Duration;

use tokio::time::sleep;

use crate::typewriter::Typewriter;

/// Drive `typewriter` to completion, one tick every `speed`.
///
/// `on_frame` runs after each tick. Dropping the returned future cancels the
/// pending sleep, so no tick lands after the caller has moved on.
pub async fn animate<F>(typewriter: &mut Typewriter, speed: Duration, mut on_frame: F)
where
    F: FnMut(&Typewriter),
{
    while !typewriter.is_complete() {
        sleep(speed).await;
        if !typewriter.tick() {
            break;
        }
        on_frame(typewriter);
    }
}
