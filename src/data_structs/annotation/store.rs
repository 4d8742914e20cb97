use anyhow::{
    anyhow,
    bail,
    ensure,
};
use hashbrown::HashSet;
use itertools::Itertools;
use log::debug;
use slotmap::{
    new_key_type,
    SlotMap,
};

use super::feature::Feature;
use super::ordering::FeatureSort;
use crate::config::{
    FeatureConfig,
    ReparentPolicy,
};
use crate::data_structs::coords::SeqLocation;

new_key_type! {
    /// Handle of a feature inside a [`FeatureStore`]. Handles of removed
    /// features are never reused for new ones.
    pub struct FeatureId;
}

struct FeatureNode<L> {
    feature:  Feature<L>,
    parent:   Option<FeatureId>,
    children: Vec<FeatureId>,
}

impl<L> FeatureNode<L> {
    fn new(feature: Feature<L>) -> Self {
        Self {
            feature,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena of features linked into a containment hierarchy.
///
/// Parent and child links are only edited through
/// [`attach_child`](FeatureStore::attach_child),
/// [`detach_child`](FeatureStore::detach_child) and
/// [`set_children`](FeatureStore::set_children), which update both
/// directions at once and refuse to create cycles.
pub struct FeatureStore<L> {
    nodes:    SlotMap<FeatureId, FeatureNode<L>>,
    reparent: ReparentPolicy,
}

impl<L> Default for FeatureStore<L> {
    fn default() -> Self { Self::new() }
}

impl<L> FeatureStore<L> {
    /// Creates an empty store using [`FeatureConfig::global`].
    pub fn new() -> Self { Self::with_config(FeatureConfig::global()) }

    pub fn with_config(config: &FeatureConfig) -> Self {
        Self {
            nodes:    SlotMap::with_key(),
            reparent: config.reparent,
        }
    }

    pub fn reparent_policy(&self) -> ReparentPolicy { self.reparent }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    pub fn contains(
        &self,
        id: FeatureId,
    ) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn insert(
        &mut self,
        feature: Feature<L>,
    ) -> FeatureId {
        self.nodes.insert(FeatureNode::new(feature))
    }

    /// Inserts `feature` and attaches it as the last child of `parent`.
    pub fn insert_child(
        &mut self,
        parent: FeatureId,
        feature: Feature<L>,
    ) -> anyhow::Result<FeatureId> {
        self.check_exists(parent)?;
        let id = self.insert(feature);
        self.link(parent, id);
        Ok(id)
    }

    pub fn get(
        &self,
        id: FeatureId,
    ) -> Option<&Feature<L>> {
        self.nodes.get(id).map(|node| &node.feature)
    }

    pub fn get_mut(
        &mut self,
        id: FeatureId,
    ) -> Option<&mut Feature<L>> {
        self.nodes
            .get_mut(id)
            .map(|node| &mut node.feature)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureId, &Feature<L>)> {
        self.nodes
            .iter()
            .map(|(id, node)| (id, &node.feature))
    }

    pub fn ids(&self) -> impl Iterator<Item = FeatureId> + '_ { self.nodes.keys() }

    /// Features without a parent.
    pub fn roots(&self) -> Vec<FeatureId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn parent(
        &self,
        id: FeatureId,
    ) -> Option<FeatureId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Children of `id` in attachment order. Empty for leaves and unknown
    /// handles.
    pub fn children(
        &self,
        id: FeatureId,
    ) -> &[FeatureId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Handles from the parent of `id` up to its root.
    pub fn ancestors(
        &self,
        id: FeatureId,
    ) -> Vec<FeatureId> {
        let mut res = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent) = current {
            res.push(parent);
            current = self.parent(parent);
        }
        res
    }

    /// Every feature below `id`, in pre-order. `id` itself is not included.
    pub fn descendants(
        &self,
        id: FeatureId,
    ) -> Vec<FeatureId> {
        let mut res = Vec::new();
        let mut stack: Vec<FeatureId> = self
            .children(id)
            .iter()
            .rev()
            .copied()
            .collect();
        while let Some(next) = stack.pop() {
            res.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        res
    }

    /// Makes `child` the last child of `parent`.
    ///
    /// Attaching a feature to its current parent is a no-op. If `child`
    /// belongs to another parent, it is moved or refused depending on the
    /// store's [`ReparentPolicy`]. Attaching a feature below itself or below
    /// one of its descendants is an error.
    pub fn attach_child(
        &mut self,
        parent: FeatureId,
        child: FeatureId,
    ) -> anyhow::Result<()> {
        self.check_attachable(parent, child)?;
        match self.nodes[child].parent {
            Some(current) if current == parent => return Ok(()),
            Some(current) => {
                self.unlink(child);
                debug!("Moved {:?} from parent {:?} to {:?}", child, current, parent);
            },
            None => {},
        }
        self.link(parent, child);
        Ok(())
    }

    /// Removes `child` from the children of `parent`. Fails if `child` is not
    /// attached to `parent`.
    pub fn detach_child(
        &mut self,
        parent: FeatureId,
        child: FeatureId,
    ) -> anyhow::Result<()> {
        self.check_exists(parent)?;
        self.check_exists(child)?;
        ensure!(
            self.nodes[child].parent == Some(parent),
            "Feature {:?} is not a child of {:?}",
            child,
            parent
        );
        self.unlink(child);
        Ok(())
    }

    /// Detaches `child` from whatever parent it has and returns that parent.
    pub fn detach(
        &mut self,
        child: FeatureId,
    ) -> anyhow::Result<Option<FeatureId>> {
        self.check_exists(child)?;
        Ok(self.unlink(child))
    }

    /// Replaces the children of `parent` with `children`.
    ///
    /// Every handle is validated before anything changes, so a failed call
    /// leaves the tree untouched. Previous children that are not in the new
    /// list become roots.
    pub fn set_children(
        &mut self,
        parent: FeatureId,
        children: Vec<FeatureId>,
    ) -> anyhow::Result<()> {
        self.check_exists(parent)?;
        let mut seen = HashSet::with_capacity(children.len());
        for &child in &children {
            self.check_attachable(parent, child)?;
            ensure!(seen.insert(child), "Feature {:?} is listed twice", child);
        }

        for old in std::mem::take(&mut self.nodes[parent].children) {
            self.nodes[old].parent = None;
        }
        for &child in &children {
            if self.nodes[child].parent.is_some() {
                self.unlink(child);
            }
            self.nodes[child].parent = Some(parent);
        }
        debug!("Set {} children of {:?}", children.len(), parent);
        self.nodes[parent].children = children;
        Ok(())
    }

    /// Removes one feature. Its children become roots.
    pub fn remove(
        &mut self,
        id: FeatureId,
    ) -> Option<Feature<L>> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        self.unlink(id);
        let node = self.nodes.remove(id)?;
        for child in &node.children {
            self.nodes[*child].parent = None;
        }
        debug!("Removed {:?}, orphaned {} children", id, node.children.len());
        Some(node.feature)
    }

    /// Removes `id` and all of its descendants, returning them in pre-order.
    pub fn remove_subtree(
        &mut self,
        id: FeatureId,
    ) -> Vec<Feature<L>> {
        if !self.nodes.contains_key(id) {
            return Vec::new();
        }
        self.unlink(id);
        let ids = std::iter::once(id)
            .chain(self.descendants(id))
            .collect_vec();
        debug!("Removing subtree of {:?} ({} features)", id, ids.len());
        ids.into_iter()
            .filter_map(|id| self.nodes.remove(id))
            .map(|node| node.feature)
            .collect()
    }

    /// Deep-copies `id` and its descendants. The copy is a new root: its
    /// parent has to be assigned explicitly.
    pub fn copy_subtree(
        &mut self,
        id: FeatureId,
    ) -> anyhow::Result<FeatureId> {
        self.check_exists(id)?;
        let feature = self.nodes[id].feature.clone();
        let root = self.insert(feature);
        let mut stack = vec![(id, root)];
        while let Some((source, target)) = stack.pop() {
            for child in self.nodes[source].children.clone() {
                let feature = self.nodes[child].feature.clone();
                let copy = self.insert(feature);
                self.link(target, copy);
                stack.push((child, copy));
            }
        }
        Ok(root)
    }

    /// `ids` of existing features, stably sorted with `sort`.
    pub fn sorted_ids<S: Into<FeatureSort>>(
        &self,
        ids: &[FeatureId],
        sort: S,
    ) -> Vec<FeatureId>
    where
        L: SeqLocation, {
        let sort = sort.into();
        ids.iter()
            .copied()
            .filter(|id| self.nodes.contains_key(*id))
            .sorted_by(|a, b| {
                sort.compare(&self.nodes[*a].feature, &self.nodes[*b].feature)
            })
            .collect()
    }

    /// Reorders the children of `id` with `sort`. Fails without changing the
    /// order if a location-based key meets a child without a location.
    pub fn sort_children<S: Into<FeatureSort>>(
        &mut self,
        id: FeatureId,
        sort: S,
    ) -> anyhow::Result<()>
    where
        L: SeqLocation, {
        self.check_exists(id)?;
        let sort = sort.into();
        let children = self.children(id).to_vec();
        sort.check(children.iter().map(|c| &self.nodes[*c].feature))?;
        let sorted = self.sorted_ids(&children, sort);
        self.nodes[id].children = sorted;
        Ok(())
    }

    fn check_exists(
        &self,
        id: FeatureId,
    ) -> anyhow::Result<()> {
        if self.nodes.contains_key(id) {
            Ok(())
        }
        else {
            Err(anyhow!("Unknown feature {:?}", id))
        }
    }

    fn check_attachable(
        &self,
        parent: FeatureId,
        child: FeatureId,
    ) -> anyhow::Result<()> {
        self.check_exists(parent)?;
        self.check_exists(child)?;
        ensure!(parent != child, "Feature {:?} cannot be its own child", child);
        if self.ancestors(parent).contains(&child) {
            bail!(
                "Attaching {:?} to {:?} would create a cycle",
                child,
                parent
            );
        }
        if let Some(current) = self.nodes[child].parent {
            if current != parent && self.reparent == ReparentPolicy::Reject {
                bail!(
                    "Feature {:?} already belongs to {:?}; detach it first",
                    child,
                    current
                );
            }
        }
        Ok(())
    }

    fn link(
        &mut self,
        parent: FeatureId,
        child: FeatureId,
    ) {
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    fn unlink(
        &mut self,
        child: FeatureId,
    ) -> Option<FeatureId> {
        let parent = self.nodes[child].parent.take()?;
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|c| *c != child);
        }
        Some(parent)
    }
}

impl<L> Clone for FeatureStore<L> {
    fn clone(&self) -> Self {
        Self {
            nodes:    self.nodes.clone(),
            reparent: self.reparent,
        }
    }
}

impl<L> Clone for FeatureNode<L> {
    fn clone(&self) -> Self {
        Self {
            feature:  self.feature.clone(),
            parent:   self.parent,
            children: self.children.clone(),
        }
    }
}

impl<L> FromIterator<Feature<L>> for FeatureStore<L> {
    fn from_iter<T: IntoIterator<Item = Feature<L>>>(iter: T) -> Self {
        let mut store = Self::new();
        iter.into_iter().for_each(|feature| {
            store.insert(feature);
        });
        store
    }
}
