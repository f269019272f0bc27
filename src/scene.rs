use crate::graph::PointGraph;
use crate::jitter::Jitter;
use crate::pacer::{format_sleep_time, Clock, FramePacer, SystemClock};
use crate::render::{draw_frame, Canvas};

/// Everything that changes from frame to frame, owned by the loop that drives it.
pub struct Scene<C: Clock = SystemClock> {
    graph: PointGraph,
    jitter: Jitter,
    pacer: FramePacer<C>,
    // last drawn frame has been shown but not yet advanced past
    shown: bool,
}

impl<C: Clock> Scene<C> {
    pub fn new(graph: PointGraph, jitter: Jitter, pacer: FramePacer<C>) -> Scene<C> {
        Scene {
            graph,
            jitter,
            pacer,
            shown: false,
        }
    }

    pub fn graph(&self) -> &PointGraph {
        &self.graph
    }

    pub fn jitter(&self) -> &Jitter {
        &self.jitter
    }

    pub fn pacer(&self) -> &FramePacer<C> {
        &self.pacer
    }

    pub fn pacer_mut(&mut self) -> &mut FramePacer<C> {
        &mut self.pacer
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        let status = format_sleep_time(self.pacer.sleep_ms());
        draw_frame(canvas, &self.graph, &status);
    }

    /// One loop iteration as seen from a present-on-return backend: settle the
    /// previously shown frame (jitter, then pace), then draw the next one.
    pub fn frame(&mut self, canvas: &mut impl Canvas) {
        if self.shown {
            self.advance();
        }
        self.draw(canvas);
        self.shown = true;
    }

    /// Jitter the graph, then block for the paced interval.
    pub fn advance(&mut self) {
        self.jitter.step(&mut self.graph);
        self.pacer.tick();
    }
}
