//! Earth Engine expression graph
//!
//! The REST API accepts computations as an `Expression`: a map of named value
//! nodes plus the name of the node to evaluate. This module models that wire
//! format and provides typed builders ([`ImageCollection`], [`Image`],
//! [`Geometry`]) for the handful of algorithms Plantclip needs.
//!
//! # Example
//!
//! ```rust
//! use plantclip::adapters::earthengine::expression::{Geometry, ImageCollection};
//! use plantclip::domain::BoundingBox;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2014, 12, 31).unwrap();
//! let mosaic = ImageCollection::load("USDA/NAIP/DOQQ")
//!     .filter_date(start, end)
//!     .mosaic();
//!
//! let rect = Geometry::rectangle(&BoundingBox::centered(35.0, -80.0, 0.005));
//! let expression = mosaic.clip(&rect).into_expression();
//! assert_eq!(expression.result, "0");
//! ```

use crate::domain::BoundingBox;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Name of the root node in expressions built here
const ROOT: &str = "0";

/// A serialized Earth Engine computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    /// Named value nodes
    pub values: BTreeMap<String, ValueNode>,

    /// Name of the node whose value is the result
    pub result: String,
}

impl Expression {
    /// Wraps a single node tree as an expression
    pub fn from_node(node: ValueNode) -> Self {
        let mut values = BTreeMap::new();
        values.insert(ROOT.to_string(), node);
        Self {
            values,
            result: ROOT.to_string(),
        }
    }

    /// The node evaluated as the result, if present
    pub fn root(&self) -> Option<&ValueNode> {
        self.values.get(&self.result)
    }
}

/// A value in an expression graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueNode {
    /// A JSON literal
    ConstantValue(Value),

    /// An array of nodes
    ArrayValue { values: Vec<ValueNode> },

    /// A dictionary of nodes
    DictionaryValue { values: BTreeMap<String, ValueNode> },

    /// A call to a named Earth Engine algorithm
    FunctionInvocationValue(FunctionInvocation),

    /// Reference to another named node in the same expression
    ValueReference(String),
}

impl ValueNode {
    /// Constant node from anything convertible to JSON
    pub fn constant(value: impl Into<Value>) -> Self {
        ValueNode::ConstantValue(value.into())
    }

    /// Invocation node for `function_name` with the given named arguments
    pub fn invoke<I, K>(function_name: &str, arguments: I) -> Self
    where
        I: IntoIterator<Item = (K, ValueNode)>,
        K: Into<String>,
    {
        ValueNode::FunctionInvocationValue(FunctionInvocation {
            function_name: function_name.to_string(),
            arguments: arguments.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        })
    }

    /// Function name if this node is an invocation
    pub fn function_name(&self) -> Option<&str> {
        match self {
            ValueNode::FunctionInvocationValue(call) => Some(&call.function_name),
            _ => None,
        }
    }

    /// Named argument if this node is an invocation
    pub fn argument(&self, name: &str) -> Option<&ValueNode> {
        match self {
            ValueNode::FunctionInvocationValue(call) => call.arguments.get(name),
            _ => None,
        }
    }

    /// Literal value if this node is a constant
    pub fn as_constant(&self) -> Option<&Value> {
        match self {
            ValueNode::ConstantValue(value) => Some(value),
            _ => None,
        }
    }
}

/// Invocation of an Earth Engine algorithm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInvocation {
    /// Algorithm name, e.g. `Image.clip`
    pub function_name: String,

    /// Named arguments
    #[serde(default)]
    pub arguments: BTreeMap<String, ValueNode>,
}

/// Builder for `ImageCollection` computations
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCollection(ValueNode);

impl ImageCollection {
    /// Loads a catalog collection by ID
    pub fn load(id: &str) -> Self {
        Self(ValueNode::invoke(
            "ImageCollection.load",
            [("id", ValueNode::constant(id))],
        ))
    }

    /// Keeps images whose `system:time_start` falls in `[start, end)`
    pub fn filter_date(self, start: NaiveDate, end: NaiveDate) -> Self {
        let range = ValueNode::invoke(
            "DateRange",
            [
                ("start", ValueNode::constant(start.format("%Y-%m-%d").to_string())),
                ("end", ValueNode::constant(end.format("%Y-%m-%d").to_string())),
            ],
        );
        let filter = ValueNode::invoke(
            "Filter.dateRangeContains",
            [
                ("leftValue", range),
                ("rightField", ValueNode::constant("system:time_start")),
            ],
        );
        Self(ValueNode::invoke(
            "Collection.filter",
            [("collection", self.0), ("filter", filter)],
        ))
    }

    /// Composites the collection into one image, later images on top
    pub fn mosaic(self) -> Image {
        Image(ValueNode::invoke(
            "ImageCollection.mosaic",
            [("collection", self.0)],
        ))
    }

    /// Per-pixel median across the collection; bands gain a `_median` suffix
    pub fn reduce_median(self) -> Image {
        let reducer = ValueNode::invoke("Reducer.median", Vec::<(&str, ValueNode)>::new());
        Image(ValueNode::invoke(
            "ImageCollection.reduce",
            [("collection", self.0), ("reducer", reducer)],
        ))
    }

    /// The underlying node
    pub fn into_node(self) -> ValueNode {
        self.0
    }
}

/// Builder for `Image` computations
#[derive(Debug, Clone, PartialEq)]
pub struct Image(ValueNode);

impl Image {
    /// Keeps the named bands, in order
    pub fn select(self, bands: &[&str]) -> Self {
        Self(ValueNode::invoke(
            "Image.select",
            [
                ("input", self.0),
                ("bandSelectors", ValueNode::constant(bands.to_vec())),
            ],
        ))
    }

    /// Converts a 3-band RGB image to `hue`, `saturation`, `value`
    pub fn rgb_to_hsv(self) -> Self {
        Self(ValueNode::invoke("Image.rgbToHsv", [("image", self.0)]))
    }

    /// Converts a 3-band HSV image to `red`, `green`, `blue`
    pub fn hsv_to_rgb(self) -> Self {
        Self(ValueNode::invoke("Image.hsvToRgb", [("image", self.0)]))
    }

    /// Appends the bands of `other` after this image's bands
    pub fn add_bands(self, other: Image) -> Self {
        Self(ValueNode::invoke(
            "Image.addBands",
            [("dstImg", self.0), ("srcImg", other.0)],
        ))
    }

    /// Masks everything outside `geometry`
    pub fn clip(self, geometry: &Geometry) -> Self {
        Self(ValueNode::invoke(
            "Image.clip",
            [("input", self.0), ("geometry", geometry.0.clone())],
        ))
    }

    /// Clips to `geometry` and resamples to `scale` metres per pixel
    pub fn clip_to_bounds_and_scale(self, geometry: &Geometry, scale: f64) -> Self {
        Self(ValueNode::invoke(
            "Image.clipToBoundsAndScale",
            [
                ("input", self.0),
                ("geometry", geometry.0.clone()),
                ("scale", ValueNode::constant(scale)),
            ],
        ))
    }

    /// The underlying node
    pub fn into_node(self) -> ValueNode {
        self.0
    }

    /// Wraps this image as a complete expression
    pub fn into_expression(self) -> Expression {
        Expression::from_node(self.0)
    }
}

/// Builder for geometry constructors
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry(ValueNode);

impl Geometry {
    /// Planar rectangle from `[west, south, east, north]`
    pub fn rectangle(bbox: &BoundingBox) -> Self {
        Self(ValueNode::invoke(
            "GeometryConstructors.Rectangle",
            [("coordinates", ValueNode::constant(bbox.to_array().to_vec()))],
        ))
    }

    /// The underlying node
    pub fn into_node(self) -> ValueNode {
        self.0
    }
}
