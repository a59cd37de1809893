// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Selection of the main-scene rendering strategy.

use lumen_core::renderer::DEFAULT_DEFERRED_LIGHT_THRESHOLD;

/// The main-scene strategies, exactly one of which runs per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderingStrategy {
    /// Depth pass only, no lighting.
    DepthOnly,
    /// One geometry pass, then one screen-space resolve per light.
    Deferred,
    /// One lit pass per light, additive after the first.
    ForwardMultiPass,
    /// One pass without lighting.
    ForwardUnlit,
}

impl RenderingStrategy {
    /// The strategy name of the lane implementing this strategy.
    pub fn lane_name(&self) -> &'static str {
        match self {
            RenderingStrategy::DepthOnly => "DepthOnly",
            RenderingStrategy::Deferred => "Deferred",
            RenderingStrategy::ForwardMultiPass => "LitForward",
            RenderingStrategy::ForwardUnlit => "SimpleUnlit",
        }
    }
}

/// Picks the strategy of a frame from its light count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategySelector {
    deferred_light_threshold: usize,
}

impl Default for StrategySelector {
    fn default() -> Self {
        Self::new(DEFAULT_DEFERRED_LIGHT_THRESHOLD)
    }
}

impl StrategySelector {
    /// Creates a selector that switches to deferred above `deferred_light_threshold` lights.
    pub fn new(deferred_light_threshold: usize) -> Self {
        Self {
            deferred_light_threshold,
        }
    }

    /// The light count above which frames are rendered deferred.
    pub fn threshold(&self) -> usize {
        self.deferred_light_threshold
    }

    /// Selects the strategy for a frame.
    ///
    /// A frame with exactly the threshold's number of lights stays forward.
    pub fn select(&self, light_count: usize, depth_only: bool) -> RenderingStrategy {
        if depth_only {
            RenderingStrategy::DepthOnly
        } else if light_count > self.deferred_light_threshold {
            RenderingStrategy::Deferred
        } else if light_count > 0 {
            RenderingStrategy::ForwardMultiPass
        } else {
            RenderingStrategy::ForwardUnlit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_around_threshold() {
        let selector = StrategySelector::new(4);
        let picks: Vec<_> = [0, 1, 4, 5]
            .into_iter()
            .map(|n| selector.select(n, false))
            .collect();
        assert_eq!(
            picks,
            vec![
                RenderingStrategy::ForwardUnlit,
                RenderingStrategy::ForwardMultiPass,
                RenderingStrategy::ForwardMultiPass,
                RenderingStrategy::Deferred,
            ]
        );
    }

    #[test]
    fn test_depth_only_wins_over_light_count() {
        let selector = StrategySelector::default();
        for n in [0, 1, 100] {
            assert_eq!(selector.select(n, true), RenderingStrategy::DepthOnly);
        }
    }

    #[test]
    fn test_zero_threshold_defers_any_light() {
        let selector = StrategySelector::new(0);
        assert_eq!(selector.select(0, false), RenderingStrategy::ForwardUnlit);
        assert_eq!(selector.select(1, false), RenderingStrategy::Deferred);
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(
            StrategySelector::default().threshold(),
            DEFAULT_DEFERRED_LIGHT_THRESHOLD
        );
    }
}
