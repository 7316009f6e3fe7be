// Debounced signal mirror
use gloo_timers::callback::Timeout;
use leptos::*;

/// Decision taken for each upstream change. The pending timer is always
/// cancelled first; whether a new one gets scheduled depends only on the
/// value differing from the mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DebounceAction<T> {
    Skip,
    Schedule(T),
}

fn debounce_action<T: PartialEq>(mirror: &T, next: T) -> DebounceAction<T> {
    if *mirror == next {
        DebounceAction::Skip
    } else {
        DebounceAction::Schedule(next)
    }
}

/// Mirrors `value` after it has been stable for `delay_ms`. Every change
/// cancels the pending timer and schedules a new one; the pending timer
/// is also cancelled when the owning scope is disposed, so no stale
/// callback can fire after unmount. Writes that would not change the
/// mirrored value are dropped so subscribers never see spurious updates.
pub fn use_debounced<T>(value: Signal<T>, delay_ms: u32) -> ReadSignal<T>
where
    T: Clone + PartialEq + 'static,
{
    let (debounced, set_debounced) = create_signal(value.get_untracked());
    let pending = store_value(None::<Timeout>);

    create_effect(move |_| {
        let next = value.get();
        pending.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
        match debounce_action(&debounced.get_untracked(), next) {
            DebounceAction::Skip => {}
            DebounceAction::Schedule(next) => {
                let timer = Timeout::new(delay_ms, move || {
                    set_debounced.try_set(next);
                });
                pending.set_value(Some(timer));
            }
        }
    });

    on_cleanup(move || {
        pending.try_update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
    });

    debounced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_value_is_skipped() {
        assert_eq!(
            debounce_action(&"ana".to_string(), "ana".to_string()),
            DebounceAction::Skip
        );
    }

    #[test]
    fn changed_value_is_scheduled() {
        assert_eq!(
            debounce_action(&"an".to_string(), "ana".to_string()),
            DebounceAction::Schedule("ana".to_string())
        );
    }

    #[test]
    fn burst_propagates_only_the_final_value_once() {
        let mut mirror = String::new();
        let mut pending = None;
        let mut fired = 0;

        // each keystroke cancels whatever was pending before it
        for next in ["a", "an", "ana"] {
            pending = match debounce_action(&mirror, next.to_string()) {
                DebounceAction::Schedule(value) => Some(value),
                DebounceAction::Skip => None,
            };
        }
        if let Some(value) = pending.take() {
            mirror = value;
            fired += 1;
        }
        assert_eq!(mirror, "ana");
        assert_eq!(fired, 1);

        // the settled value arriving again schedules nothing
        assert_eq!(
            debounce_action(&mirror, "ana".to_string()),
            DebounceAction::Skip
        );
    }
}
