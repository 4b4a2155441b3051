use a11ybar_core::{HeadingNode, Theme};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub nodes: Rc<Vec<HeadingNode>>,
    pub theme: Theme,
}

/// Nested list of headings: a chip with the tag, then the rendered text, then
/// the node's own heading children one level deeper.
#[function_component(HeadingTree)]
pub fn heading_tree(p: &Props) -> Html {
    let chip = crate::theme::skin(p.theme).chip;
    html! {
      <ul class="heading-tree">
        { for p.nodes.iter().map(|node| heading_item(node, chip)) }
      </ul>
    }
}

fn heading_item(node: &HeadingNode, chip: &'static str) -> Html {
    html! {
      <li class="heading-tree__item">
        <span class={chip}>{ node.tag_name.clone() }</span>
        <span class="heading-tree__text">{ node.inner_text.clone() }</span>
        if !node.children.is_empty() {
          <ul class="heading-tree">
            { for node.children.iter().map(|child| heading_item(child, chip)) }
          </ul>
        }
      </li>
    }
}
