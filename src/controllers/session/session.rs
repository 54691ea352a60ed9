use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::controllers::events::update_event::UpdateEvent;
use crate::controllers::ports::presenter_port::PresenterPort;
use crate::controllers::session::pending::Pending;
use crate::controllers::session::session_config::SessionConfig;
use crate::controllers::session::session_id::SessionId;
use crate::controllers::session::update_context::UpdateContext;
use crate::core::actions::generate_curve::generate_curve::generate_requested_curve;
use crate::core::data::fractal_params::FractalParameters;
use crate::core::data::vertex_sequence::VertexSequence;

enum Mutation {
    Append {
        vertices: VertexSequence,
        elapsed: Duration,
    },
    Erase,
    SetEnabled(bool),
}

struct Queued {
    mutation: Mutation,
    done: Sender<()>,
}

struct SessionState {
    buffer: VertexSequence,
    enabled: bool,
    applied_ticket: u64,
    // Mutations that reached the update context ahead of an earlier ticket.
    queued: BTreeMap<u64, Queued>,
}

impl SessionState {
    fn apply(&mut self, session: SessionId, mutation: Mutation) -> UpdateEvent {
        match mutation {
            Mutation::Append { vertices, elapsed } => {
                let appended = vertices.len();
                self.buffer.append(vertices);

                UpdateEvent::VerticesAppended {
                    session,
                    appended,
                    total: self.buffer.len(),
                    elapsed,
                }
            }
            Mutation::Erase => {
                self.buffer.clear();

                UpdateEvent::VerticesErased { session }
            }
            Mutation::SetEnabled(enabled) => {
                self.enabled = enabled;

                UpdateEvent::SessionEnabled { session, enabled }
            }
        }
    }
}

struct SessionShared {
    next_ticket: AtomicU64,
    state: Mutex<SessionState>,
}

impl SessionShared {
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs on the update context. Applies every mutation whose turn has come.
    fn apply_in_order(
        &self,
        session: SessionId,
        ticket: u64,
        queued: Queued,
        presenter_port: &dyn PresenterPort,
    ) {
        let mut completed = Vec::new();

        {
            let mut state = self.lock();
            state.queued.insert(ticket, queued);

            loop {
                let next_ticket = state.applied_ticket + 1;
                let Some(next) = state.queued.remove(&next_ticket) else {
                    break;
                };

                state.applied_ticket = next_ticket;
                let event = state.apply(session, next.mutation);
                completed.push((event, next.done));
            }
        }

        for (event, done) in completed {
            presenter_port.present(event);
            let _ = done.send(());
        }
    }
}

/// One drawing slot: a result buffer and an enabled flag.
///
/// Operations return a [`Pending`] handle as soon as they are issued. The
/// geometry runs on the rayon pool; the buffer itself only changes on the
/// shared [`UpdateContext`], one whole operation at a time and in the order
/// the operations were issued to this session.
///
/// Cloning yields another handle to the same session.
#[derive(Clone)]
pub struct FractalSession {
    id: SessionId,
    config: SessionConfig,
    shared: Arc<SessionShared>,
    update_context: Arc<UpdateContext>,
    presenter_port: Arc<dyn PresenterPort>,
}

impl FractalSession {
    pub fn new(
        config: SessionConfig,
        update_context: Arc<UpdateContext>,
        presenter_port: Arc<dyn PresenterPort>,
    ) -> Self {
        Self {
            id: SessionId::next(),
            config,
            shared: Arc::new(SessionShared {
                next_ticket: AtomicU64::new(0),
                state: Mutex::new(SessionState {
                    buffer: VertexSequence::new(),
                    enabled: true,
                    applied_ticket: 0,
                    queued: BTreeMap::new(),
                }),
            }),
            update_context,
            presenter_port,
        }
    }

    /// Computes the curve for `params` and appends it to the buffer.
    ///
    /// Missing parameters fall back to the defaults. Out-of-range parameters
    /// append nothing; the buffer keeps its previous content.
    pub fn compute(&self, params: Option<FractalParameters>) -> Pending {
        let (ticket, done, pending) = self.issue();

        let id = self.id;
        let config = self.config;
        let shared = Arc::clone(&self.shared);
        let update_context = Arc::clone(&self.update_context);
        let presenter_port = Arc::clone(&self.presenter_port);

        debug!(session = %id, ticket, ?params, "computing curve");

        rayon::spawn(move || {
            let start = Instant::now();
            let vertices =
                generate_requested_curve(config.curve(), params, config.start(), config.size());
            let elapsed = start.elapsed();

            debug!(
                session = %id,
                ticket,
                vertices = vertices.len(),
                ?elapsed,
                "curve computed"
            );

            Self::publish(
                &update_context,
                id,
                shared,
                presenter_port,
                ticket,
                Queued {
                    mutation: Mutation::Append { vertices, elapsed },
                    done,
                },
            );
        });

        pending
    }

    /// Removes every vertex from the buffer.
    pub fn erase(&self) -> Pending {
        self.submit(Mutation::Erase)
    }

    pub fn set_enabled(&self, enabled: bool) -> Pending {
        self.submit(Mutation::SetEnabled(enabled))
    }

    /// Copy of the buffer as of the last applied operation.
    #[must_use]
    pub fn snapshot(&self) -> VertexSequence {
        self.shared.lock().buffer.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.lock().buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.lock().buffer.is_empty()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.shared.lock().enabled
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.is_enabled()
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    fn issue(&self) -> (u64, Sender<()>, Pending) {
        let ticket = self.shared.next_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let (done, receiver) = mpsc::channel();

        (ticket, done, Pending::new(receiver))
    }

    fn submit(&self, mutation: Mutation) -> Pending {
        let (ticket, done, pending) = self.issue();

        Self::publish(
            &self.update_context,
            self.id,
            Arc::clone(&self.shared),
            Arc::clone(&self.presenter_port),
            ticket,
            Queued { mutation, done },
        );

        pending
    }

    fn publish(
        update_context: &UpdateContext,
        id: SessionId,
        shared: Arc<SessionShared>,
        presenter_port: Arc<dyn PresenterPort>,
        ticket: u64,
        queued: Queued,
    ) {
        update_context.post(move || {
            shared.apply_in_order(id, ticket, queued, presenter_port.as_ref());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    use crate::core::actions::generate_curve::generate_curve::generate_curve;
    use crate::core::fractals::curve_kinds::CurveKinds;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<UpdateEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<UpdateEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl PresenterPort for MockPresenterPort {
        fn present(&self, event: UpdateEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn create_session(curve: CurveKinds) -> (FractalSession, Arc<MockPresenterPort>) {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let update_context = Arc::new(UpdateContext::new().unwrap());
        let session = FractalSession::new(
            SessionConfig::for_curve(curve),
            update_context,
            Arc::clone(&presenter_port) as Arc<dyn PresenterPort>,
        );

        (session, presenter_port)
    }

    fn expected_curve(curve: CurveKinds, iterations: i64, angle_divisor: i64) -> VertexSequence {
        let config = SessionConfig::for_curve(curve);
        let params = FractalParameters::new(iterations, angle_divisor)
            .validate()
            .unwrap();

        generate_curve(curve, params, config.start(), config.size())
    }

    #[test]
    fn test_new_session_is_empty_and_enabled() {
        let (session, _) = create_session(CurveKinds::Cesaro);

        assert!(session.is_empty());
        assert!(session.is_enabled());
        assert!(!session.is_busy());
    }

    #[test]
    fn test_compute_appends_full_curve() {
        let (session, _) = create_session(CurveKinds::Cesaro);

        session.compute(Some(FractalParameters::new(3, 4))).wait();

        assert_eq!(session.len(), 4 * 4usize.pow(3) + 1);
        assert_eq!(session.snapshot(), expected_curve(CurveKinds::Cesaro, 3, 4));
    }

    #[test]
    fn test_compute_koch_session() {
        let (session, _) = create_session(CurveKinds::Koch);

        session.compute(Some(FractalParameters::new(2, 3))).wait();

        assert_eq!(session.snapshot(), expected_curve(CurveKinds::Koch, 2, 3));
    }

    #[test]
    fn test_compute_appends_rather_than_replaces() {
        let (session, _) = create_session(CurveKinds::Cesaro);

        session.compute(Some(FractalParameters::new(1, 4))).wait();
        session.compute(Some(FractalParameters::new(0, 4))).wait();

        let mut expected = expected_curve(CurveKinds::Cesaro, 1, 4);
        expected.append(expected_curve(CurveKinds::Cesaro, 0, 4));
        assert_eq!(session.snapshot(), expected);
    }

    #[test]
    fn test_compute_with_missing_params_uses_defaults() {
        let (session, _) = create_session(CurveKinds::Cesaro);

        session
            .compute(FractalParameters::from_inputs(Some(6), None))
            .wait();

        assert_eq!(session.snapshot(), expected_curve(CurveKinds::Cesaro, 0, 2));
    }

    #[test]
    fn test_compute_out_of_range_leaves_buffer_unchanged() {
        let (session, presenter_port) = create_session(CurveKinds::Cesaro);

        session.compute(Some(FractalParameters::new(1, 4))).wait();
        let before = session.snapshot();
        presenter_port.take_events();

        for params in [
            FractalParameters::new(-1, 4),
            FractalParameters::new(16, 4),
            FractalParameters::new(2, 0),
            FractalParameters::new(2, 51),
        ] {
            session.compute(Some(params)).wait();
        }

        assert_eq!(session.snapshot(), before);
        for event in presenter_port.take_events() {
            match event {
                UpdateEvent::VerticesAppended { appended, total, .. } => {
                    assert_eq!(appended, 0);
                    assert_eq!(total, before.len());
                }
                other => panic!("unexpected event {:?}", other),
            }
        }
    }

    #[test]
    fn test_erase_clears_buffer() {
        let (session, _) = create_session(CurveKinds::Cesaro);

        session.compute(Some(FractalParameters::new(2, 4))).wait();
        assert!(!session.is_empty());

        session.erase().wait();

        assert!(session.is_empty());
    }

    #[test]
    fn test_erase_of_empty_buffer_stays_empty() {
        let (session, _) = create_session(CurveKinds::Koch);

        session.erase().wait();

        assert!(session.is_empty());
    }

    #[test]
    fn test_erase_issued_after_compute_is_applied_after_it() {
        let (session, presenter_port) = create_session(CurveKinds::Cesaro);

        // The erase reaches the update context long before the geometry is
        // done, but it was issued second and must be applied second.
        let compute = session.compute(Some(FractalParameters::new(6, 4)));
        session.erase().wait();
        compute.wait();

        assert!(session.is_empty());

        let events = presenter_port.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], UpdateEvent::VerticesAppended { .. }));
        assert!(matches!(events[1], UpdateEvent::VerticesErased { .. }));
    }

    #[test]
    fn test_operations_are_published_in_issue_order() {
        let (session, presenter_port) = create_session(CurveKinds::Cesaro);

        let pending = vec![
            session.set_enabled(false),
            session.compute(Some(FractalParameters::new(5, 4))),
            session.compute(Some(FractalParameters::new(0, 4))),
            session.erase(),
            session.compute(Some(FractalParameters::new(1, 4))),
            session.set_enabled(true),
        ];
        for handle in pending {
            handle.wait();
        }

        let id = session.id();
        let events = presenter_port.take_events();
        assert_eq!(events.len(), 6);
        assert_eq!(
            events[0],
            UpdateEvent::SessionEnabled {
                session: id,
                enabled: false
            }
        );
        assert!(matches!(
            events[1],
            UpdateEvent::VerticesAppended { appended: 4097, total: 4097, .. }
        ));
        assert!(matches!(
            events[2],
            UpdateEvent::VerticesAppended { appended: 5, total: 4102, .. }
        ));
        assert_eq!(events[3], UpdateEvent::VerticesErased { session: id });
        assert!(matches!(
            events[4],
            UpdateEvent::VerticesAppended { appended: 17, total: 17, .. }
        ));
        assert_eq!(
            events[5],
            UpdateEvent::SessionEnabled {
                session: id,
                enabled: true
            }
        );
        assert_eq!(session.snapshot(), expected_curve(CurveKinds::Cesaro, 1, 4));
    }

    #[test]
    fn test_set_enabled_toggles_busy() {
        let (session, presenter_port) = create_session(CurveKinds::Cesaro);

        session.set_enabled(false).wait();
        assert!(session.is_busy());

        session.set_enabled(true).wait();
        assert!(!session.is_busy());

        let events = presenter_port.take_events();
        assert_eq!(
            events,
            vec![
                UpdateEvent::SessionEnabled {
                    session: session.id(),
                    enabled: false
                },
                UpdateEvent::SessionEnabled {
                    session: session.id(),
                    enabled: true
                },
            ]
        );
    }

    #[test]
    fn test_concurrent_computes_never_interleave() {
        let (session, _) = create_session(CurveKinds::Cesaro);
        let expected = expected_curve(CurveKinds::Cesaro, 3, 5);
        let callers = 8;

        thread::scope(|scope| {
            for _ in 0..callers {
                let session = session.clone();
                scope.spawn(move || {
                    session.compute(Some(FractalParameters::new(3, 5))).wait();
                });
            }
        });

        let snapshot = session.snapshot();
        assert_eq!(snapshot.len(), callers * expected.len());
        for chunk in snapshot.points().chunks(expected.len()) {
            assert_eq!(chunk, expected.points());
        }
    }

    #[test]
    fn test_presenter_receives_appended_counts() {
        let (session, presenter_port) = create_session(CurveKinds::Koch);

        session.compute(Some(FractalParameters::new(2, 2))).wait();

        let events = presenter_port.take_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            UpdateEvent::VerticesAppended {
                session: id,
                appended,
                total,
                ..
            } => {
                assert_eq!(*id, session.id());
                assert_eq!(*appended, 17);
                assert_eq!(*total, 17);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_clones_share_the_buffer() {
        let (session, _) = create_session(CurveKinds::Cesaro);
        let handle = session.clone();

        handle.compute(Some(FractalParameters::new(0, 2))).wait();

        assert_eq!(session.id(), handle.id());
        assert_eq!(session.len(), 5);
        assert_eq!(session.snapshot().first(), Some(session.config().start()));
    }
}
