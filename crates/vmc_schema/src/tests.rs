use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::any::type_name;
use core::marker::PhantomData;
use std::collections::HashMap;

use crate::derive::{Cases, Constructable};
use crate::info::{FieldDescriptor, TypeInfo};
use crate::registry::{ComponentRegistry, Configurable, ConstructorStore, SchemaRegistry, StoreError};
use crate::value::{Value, ValueError, ValueKind, ValueMap};
use crate::{Cases, Color, Constructable, Date, FieldValue};

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Constructable, Clone, Debug, PartialEq)]
#[constructable(init = new)]
struct Account {
    name: String,
    age: i32,
    active: bool,
}

impl Account {
    fn new() -> Self {
        Self {
            name: String::new(),
            age: 0,
            active: false,
        }
    }
}

#[derive(Cases, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Priority {
    Low,
    Normal,
    High,
}

#[derive(Constructable, Clone, Debug, Default, PartialEq)]
#[constructable(default)]
struct Address {
    street: String,
    city: String,
    zip: Option<String>,
}

#[derive(Constructable, Clone, Debug, PartialEq)]
#[constructable(init = Self::empty)]
struct Order {
    id: u64,
    total: f64,
    weight: f32,
    created: Date,
    tint: Color,
    #[constructable(cases)]
    priority: Priority,
    #[constructable(nested)]
    shipping: Address,
    #[constructable(nested)]
    billing: Option<Address>,
    tags: Vec<String>,
    lines: BTreeMap<String, u32>,
    flags: BTreeSet<i8>,
    rgb: [u8; 3],
    note: Option<String>,
}

impl Order {
    fn empty() -> Self {
        Self {
            id: 0,
            total: 0.0,
            weight: 0.0,
            created: Date::UNIX_EPOCH,
            tint: Color::WHITE,
            priority: Priority::Normal,
            shipping: Address::default(),
            billing: None,
            tags: Vec::new(),
            lines: BTreeMap::new(),
            flags: BTreeSet::new(),
            rgb: [0; 3],
            note: None,
        }
    }

    fn sample() -> Self {
        Self {
            id: u64::MAX,
            total: 12.5,
            weight: 0.25,
            created: Date::new(1_700_000_000, 42),
            tint: Color::rgba(0.5, 0.25, 1.0, 0.75),
            priority: Priority::High,
            shipping: Address {
                street: "1 Main St".into(),
                city: "Springfield".into(),
                zip: Some("12345".into()),
            },
            billing: Some(Address {
                street: "2 Side St".into(),
                city: "Shelbyville".into(),
                zip: None,
            }),
            tags: vec!["gift".into(), "fragile".into()],
            lines: BTreeMap::from([("apple".to_string(), 3), ("pear".to_string(), 1)]),
            flags: BTreeSet::from([-1, 7]),
            rgb: [1, 2, 3],
            note: Some(String::new()),
        }
    }
}

/// Not a supported field type.
#[derive(Clone, Debug, PartialEq)]
struct Handle(u32);

#[derive(Constructable, Clone, Debug, PartialEq)]
#[constructable(default)]
struct Scene {
    handle: Handle,
    spares: Vec<Handle>,
    by_name: HashMap<String, Option<Handle>>,
    pinned: Option<Handle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            handle: Handle(0),
            spares: Vec::new(),
            by_name: HashMap::new(),
            pinned: None,
        }
    }
}

#[derive(Constructable, Clone, Debug, PartialEq)]
#[constructable(init = new)]
struct Cached {
    value: i32,
    #[constructable(skip)]
    cache: Vec<u8>,
}

impl Cached {
    fn new() -> Self {
        Self {
            value: 1,
            cache: vec![9, 9],
        }
    }
}

#[derive(Constructable, Clone, Debug, Default, PartialEq)]
#[constructable(default)]
struct Wrapper<T> {
    value: T,
    label: String,
    #[doc(hidden)]
    marker: PhantomData<fn() -> T>,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Tag<const N: usize>;

#[derive(Constructable, Clone, Debug, Default, PartialEq)]
#[constructable(default)]
struct Holder<const N: usize> {
    tag: Tag<N>,
    size: i32,
}

#[derive(Constructable, Clone, Debug, Default, PartialEq)]
#[constructable(default)]
struct Pair(i32, i32);

#[derive(Constructable, Clone, Debug, Default, PartialEq)]
#[constructable(default)]
struct Keywords {
    r#type: String,
    r#match: Option<bool>,
}

#[derive(Constructable, Clone, Debug, Default, PartialEq)]
#[constructable(default)]
struct Readings {
    samples: Vec<Option<i32>>,
    backup: Option<Vec<i32>>,
}

fn names(fields: &[FieldDescriptor]) -> Vec<&'static str> {
    fields.iter().map(|f| f.name()).collect()
}

fn assert_schema_consistent<T: Constructable>() {
    let fields = T::field_descriptors();
    let defaults = T::default_values();

    let mut expected = names(fields);
    expected.sort_unstable();
    let mut keys: Vec<_> = defaults.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, expected, "default keys of `{}`", type_name::<T>());

    for field in fields {
        assert_eq!(field.is_optional(), field.type_info().is_optional());
        let value = defaults.get(field.name()).unwrap();
        assert!(
            value.conforms_to(field.type_info()),
            "`{}` does not conform to {}",
            field.name(),
            field.type_info()
        );
    }
}

// -----------------------------------------------------------------------------
// Schema

#[test]
fn account_scenario() {
    let fields = Account::field_descriptors();
    assert_eq!(names(fields), ["name", "age", "active"]);
    assert_eq!(fields[0].type_info(), &TypeInfo::String);
    assert_eq!(fields[1].type_info(), &TypeInfo::Int);
    assert_eq!(fields[2].type_info(), &TypeInfo::Bool);
    assert!(fields.iter().all(|f| !f.is_optional()));

    let defaults = Account::default_values();
    assert_eq!(defaults.len(), 3);
    assert_eq!(defaults.get("name"), Some(&Value::from("")));
    assert_eq!(defaults.get("age"), Some(&Value::Int(0)));
    assert_eq!(defaults.get("active"), Some(&Value::Bool(false)));

    assert_eq!(Account::reconstruct(&defaults), Account::new());
}

#[test]
fn descriptors_are_built_once() {
    assert!(core::ptr::eq(
        Order::field_descriptors(),
        Order::field_descriptors()
    ));
}

#[test]
fn order_schema() {
    let fields = Order::field_descriptors();
    assert_eq!(
        names(fields),
        [
            "id", "total", "weight", "created", "tint", "priority", "shipping", "billing", "tags",
            "lines", "flags", "rgb", "note",
        ]
    );

    let shapes: Vec<String> = fields.iter().map(|f| f.type_info().to_string()).collect();
    assert_eq!(shapes[0], "Int");
    assert_eq!(shapes[1], "Double");
    assert_eq!(shapes[2], "Float");
    assert_eq!(shapes[3], "Date");
    assert_eq!(shapes[4], "Color");
    assert_eq!(shapes[8], "Array<String>");
    assert_eq!(shapes[9], "Map<String, Int>");
    assert_eq!(shapes[10], "Set<Int>");
    assert_eq!(shapes[11], "Array<Int>");
    assert_eq!(shapes[12], "Optional<String>");

    let priority = fields[5].type_info().as_enum().unwrap();
    assert_eq!(priority.cases(), ["Low", "Normal", "High"]);

    let shipping = fields[6].type_info().as_nested().unwrap();
    assert_eq!(shipping.type_name(), type_name::<Address>());
    assert_eq!(names(shipping.field_descriptors()), ["street", "city", "zip"]);

    assert!(fields[7].is_optional());
    let billing = fields[7].type_info().unwrap_optional().as_nested().unwrap();
    assert_eq!(billing, shipping);
}

#[test]
fn schemas_are_consistent() {
    assert_schema_consistent::<Account>();
    assert_schema_consistent::<Address>();
    assert_schema_consistent::<Order>();
    assert_schema_consistent::<Scene>();
    assert_schema_consistent::<Cached>();
    assert_schema_consistent::<Wrapper<u8>>();
    assert_schema_consistent::<Pair>();
    assert_schema_consistent::<Keywords>();
    assert_schema_consistent::<Readings>();
}

#[test]
fn raw_identifiers() {
    assert_eq!(names(Keywords::field_descriptors()), ["type", "match"]);

    let mut values = Keywords::default_values();
    values.insert("type", "struct");
    values.insert("match", Value::some(true));
    let keywords = Keywords::reconstruct(&values);
    assert_eq!(keywords.r#type, "struct");
    assert_eq!(keywords.r#match, Some(true));
}

// -----------------------------------------------------------------------------
// Round trips

#[test]
fn order_round_trip() {
    let order = Order::sample();
    let values = order.snapshot();
    assert_eq!(Order::reconstruct(&values), order);
    assert_eq!(Order::reconstruct(&Order::default_values()), Order::empty());
}

#[test]
fn nested_round_trip() {
    let order = Order::sample();
    let values = order.snapshot();

    let Some(Value::Nested(shipping)) = values.get("shipping") else {
        panic!("expected a nested value");
    };
    assert_eq!(shipping.get("city"), Some(&Value::from("Springfield")));
    assert_eq!(shipping.get("zip"), Some(&Value::some("12345")));

    let billing = values.get("billing").unwrap();
    assert_eq!(billing.kind(), ValueKind::Optional);
    let Some(Value::Nested(billing)) = billing.flatten_optional() else {
        panic!("expected a nested value");
    };
    assert_eq!(billing.get("zip"), Some(&Value::NONE));

    assert_eq!(Address::reconstruct(shipping), order.shipping);
    assert_eq!(Some(Address::reconstruct(billing)), order.billing);
}

#[test]
fn optional_fields_are_explicit() {
    let mut order = Order::empty();
    let values = order.snapshot();
    assert_eq!(values.get("note"), Some(&Value::NONE));
    assert_eq!(values.get("billing"), Some(&Value::NONE));

    order.note = Some(String::new());
    assert_eq!(order.snapshot().get("note"), Some(&Value::some("")));
}

#[test]
fn opaque_fields() {
    let fields = Scene::field_descriptors();
    assert_eq!(
        fields.iter().map(|f| f.type_info().to_string()).collect::<Vec<_>>(),
        [
            "Custom(Handle)",
            "Array<Custom(Handle)>",
            "Map<String, Optional<Custom(Handle)>>",
            "Optional<Custom(Handle)>",
        ]
    );
    let custom = fields[0].type_info().as_custom().unwrap();
    assert_eq!(custom.name(), "Handle");
    assert_eq!(custom.type_name(), type_name::<Handle>());

    let scene = Scene {
        handle: Handle(1),
        spares: vec![Handle(2), Handle(3)],
        by_name: HashMap::from([("a".to_string(), Some(Handle(4))), ("b".to_string(), None)]),
        pinned: Some(Handle(5)),
    };
    let values = scene.snapshot();
    let Some(Value::Custom(handle)) = values.get("handle") else {
        panic!("expected an opaque value");
    };
    assert_eq!(handle.downcast_ref::<Handle>(), Some(&Handle(1)));
    assert_eq!(Scene::reconstruct(&values), scene);
}

#[test]
fn opaque_mismatch_is_an_error() {
    let mut values = Scene::default_values();
    values.insert("handle", Value::from(crate::value::OpaqueValue::new(7_u32)));
    let err = Scene::try_reconstruct(&values).unwrap_err();
    assert!(matches!(err.root_cause(), ValueError::OpaqueMismatch { .. }));
}

#[test]
fn excluded_fields_come_from_the_initializer() {
    assert_eq!(names(Cached::field_descriptors()), ["value"]);

    let cached = Cached {
        value: 5,
        cache: Vec::new(),
    };
    let rebuilt = Cached::reconstruct(&cached.snapshot());
    assert_eq!(rebuilt.value, 5);
    assert_eq!(rebuilt.cache, [9, 9]);
}

#[test]
fn positional_fields_have_no_schema() {
    assert!(Pair::field_descriptors().is_empty());
    assert!(Pair(1, 2).snapshot().is_empty());
    assert_eq!(Pair::reconstruct(&ValueMap::new()), Pair(0, 0));
}

#[test]
fn generic_schemas_per_instantiation() {
    let ints = Wrapper::<i32>::field_descriptors();
    let strings = Wrapper::<String>::field_descriptors();
    assert_eq!(names(ints), ["value", "label"]);
    assert!(!core::ptr::eq(ints, strings));
    assert!(core::ptr::eq(ints, Wrapper::<i32>::field_descriptors()));

    let int_type = ints[0].type_info().as_custom().unwrap();
    let string_type = strings[0].type_info().as_custom().unwrap();
    assert_eq!(int_type.name(), "T");
    assert_eq!(int_type.type_name(), type_name::<i32>());
    assert_eq!(string_type.type_name(), type_name::<String>());

    let wrapper = Wrapper {
        value: 3_i32,
        label: "three".into(),
        marker: PhantomData,
    };
    assert_eq!(Wrapper::reconstruct(&wrapper.snapshot()), wrapper);
}

#[test]
fn const_generic_schemas_per_instantiation() {
    let one = Holder::<1>::field_descriptors();
    let two = Holder::<2>::field_descriptors();
    assert!(!core::ptr::eq(one, two));

    let one_tag = one[0].type_info().as_custom().unwrap();
    let two_tag = two[0].type_info().as_custom().unwrap();
    assert_eq!(one_tag.type_name(), type_name::<Tag<1>>());
    assert_eq!(two_tag.type_name(), type_name::<Tag<2>>());

    assert_schema_consistent::<Holder<1>>();
    assert_schema_consistent::<Holder<2>>();

    let holder = Holder::<2> { tag: Tag, size: 4 };
    assert_eq!(Holder::reconstruct(&holder.snapshot()), holder);
}

// -----------------------------------------------------------------------------
// Reconstruction rules

#[test]
fn optional_field_degrades_to_none() {
    let mut values = Address::default_values();
    values.insert("city", "Ogdenville");

    // absent
    values.remove("zip");
    assert_eq!(Address::reconstruct(&values).zip, None);

    // empty
    values.insert("zip", Value::NONE);
    assert_eq!(Address::reconstruct(&values).zip, None);

    // wrong shape
    values.insert("zip", Value::Int(12345));
    assert_eq!(Address::reconstruct(&values).zip, None);
    values.insert("zip", Value::some(12345));
    assert_eq!(Address::reconstruct(&values).zip, None);

    // bare value of the right shape
    values.insert("zip", "54321");
    assert_eq!(Address::reconstruct(&values).zip.as_deref(), Some("54321"));

    assert_eq!(Address::reconstruct(&values).city, "Ogdenville");
}

#[test]
fn optional_elements_inside_collections() {
    let mut values = Readings::default_values();
    values.insert(
        "samples",
        Value::Array(vec![Value::some(1), Value::NONE, Value::Int(3)]),
    );
    values.insert("backup", Value::some(vec![4, 5]));
    let readings = Readings::reconstruct(&values);
    assert_eq!(readings.samples, [Some(1), None, Some(3)]);
    assert_eq!(readings.backup, Some(vec![4, 5]));

    // A bad element spoils the optional field as a whole.
    values.insert(
        "backup",
        Value::some(Value::Array(vec![Value::Int(4), Value::from("five")])),
    );
    assert_eq!(Readings::reconstruct(&values).backup, None);

    // And is fatal for a required one.
    values.insert(
        "samples",
        Value::Array(vec![Value::some(1), Value::from("two")]),
    );
    let err = Readings::try_reconstruct(&values).unwrap_err();
    assert!(matches!(err, ValueError::InField { field: "samples", .. }));
}

#[test]
fn nested_optional_fields_follow_the_same_rules() {
    let mut values = Order::sample().snapshot();
    let Some(Value::Nested(shipping)) = values.get_mut("shipping") else {
        panic!("expected a nested value");
    };
    shipping.remove("zip");

    let order = Order::reconstruct(&values);
    assert_eq!(order.shipping.zip, None);
    assert_eq!(order.shipping.city, "Springfield");
}

#[test]
fn missing_required_field() {
    let mut values = Account::default_values();
    values.remove("age");
    let err = Account::try_reconstruct(&values).unwrap_err();
    assert_eq!(err, ValueError::MissingField.in_field("age"));
    assert_eq!(err.to_string(), "field `age`: missing value for required field");
}

#[test]
fn mismatched_required_field() {
    let mut values = Account::default_values();
    values.insert("active", "yes");
    let err = Account::try_reconstruct(&values).unwrap_err();
    assert_eq!(
        err.root_cause(),
        &ValueError::mismatch(ValueKind::Bool, ValueKind::String)
    );

    let mut values = Order::default_values();
    values.insert("id", -1);
    let err = Order::try_reconstruct(&values).unwrap_err();
    assert!(matches!(err.root_cause(), ValueError::OutOfRange { value: -1, .. }));

    let mut values = Order::default_values();
    values.insert("priority", Value::Enum("Urgent".into()));
    let err = Order::try_reconstruct(&values).unwrap_err();
    assert!(matches!(err.root_cause(), ValueError::UnknownCase { .. }));

    let mut values = Order::default_values();
    values.insert("rgb", vec![1, 2]);
    let err = Order::try_reconstruct(&values).unwrap_err();
    assert_eq!(
        err.root_cause(),
        &ValueError::Length {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn nested_errors_carry_the_path() {
    let mut values = Order::default_values();
    let Some(Value::Nested(shipping)) = values.get_mut("shipping") else {
        panic!("expected a nested value");
    };
    shipping.remove("city");

    let err = Order::try_reconstruct(&values).unwrap_err();
    assert_eq!(
        err.to_string(),
        "field `shipping`: field `city`: missing value for required field"
    );
}

#[test]
#[should_panic(expected = "cannot reconstruct")]
fn reconstruct_panics_on_desync() {
    Account::reconstruct(&ValueMap::new());
}

#[test]
fn aggregates_are_field_values() {
    let address = Address {
        street: "3 Elm St".into(),
        city: "Capital City".into(),
        zip: None,
    };
    let value = address.to_value();
    assert_eq!(value, Value::Nested(address.snapshot()));
    assert_eq!(Address::from_value(&value), Ok(address));
    assert!(Address::from_value(&Value::Int(0)).is_err());
}

#[test]
fn cases() {
    assert_eq!(Priority::CASES, ["Low", "Normal", "High"]);
    assert_eq!(Priority::Normal.case_name(), "Normal");
    assert_eq!(Priority::from_case_name("High"), Some(Priority::High));
    assert_eq!(Priority::from_case_name("high"), None);
    assert_eq!(Priority::Low.to_value(), Value::Enum("Low".into()));
}

// -----------------------------------------------------------------------------
// Registries

#[derive(Constructable, Clone, Debug, PartialEq)]
#[constructable(default, auto_register)]
struct Preferences {
    volume: f32,
    #[constructable(cases)]
    priority: Option<Priority>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            volume: 0.5,
            priority: None,
        }
    }
}

#[test]
fn schema_registry_follows_dependencies() {
    let mut registry = SchemaRegistry::new();
    assert!(registry.register::<Order>());
    assert!(!registry.register::<Order>());

    assert!(registry.contains(type_name::<Order>()));
    assert!(registry.contains(type_name::<Address>()));
    assert!(registry.get_enum(type_name::<Priority>()).is_some());
    assert_eq!(registry.len(), 3);
}

#[test]
fn schema_registry_refines_custom_leaves() {
    let mut registry = SchemaRegistry::new();
    registry.register::<Address>();
    registry.register_cases::<Priority>();

    #[derive(Constructable, Clone, Default)]
    #[constructable(default)]
    struct Loose {
        home: Option<Address>,
        levels: Vec<Priority>,
        handle: Option<String>,
    }

    let fields = Loose::field_descriptors();
    assert_eq!(fields[0].type_info().to_string(), "Optional<Custom(Address)>");
    assert!(fields[1].type_info().contains_custom());

    registry.register::<Loose>();
    let refined = registry
        .refined_descriptors(type_name::<Loose>())
        .unwrap();
    assert!(refined[0].type_info().unwrap_optional().as_nested().is_ok());
    assert!(refined[1].type_info().as_array().unwrap().as_enum().is_ok());
    assert_eq!(refined[2].type_info(), fields[2].type_info());
    assert!(refined.iter().all(|f| !f.type_info().contains_custom()));
}

#[cfg(feature = "auto_register")]
#[test]
fn auto_registration() {
    let mut registry = SchemaRegistry::new();
    if registry.auto_register() {
        assert!(registry.contains(type_name::<Preferences>()));
        assert!(registry.contains(type_name::<Priority>()));
        // Generic types are never submitted.
        assert!(!registry.iter().any(|s| s.type_name().contains("Wrapper")));
    }
}

#[derive(Cases, Clone, Copy, Debug, PartialEq)]
enum Category {
    Text,
    Media,
    Layout,
}

#[derive(Constructable, Clone, Debug, Default, PartialEq)]
#[constructable(default)]
struct LabelModel {
    text: String,
    size: Option<u8>,
}

#[derive(Default)]
struct Label {
    text: String,
    size: u8,
    configured: usize,
}

impl Configurable for Label {
    type Model = LabelModel;

    fn configure(&mut self, model: &LabelModel) {
        self.text.clone_from(&model.text);
        self.size = model.size.unwrap_or(12);
        self.configured += 1;
    }
}

#[derive(Default)]
struct Banner {
    text: String,
}

impl Configurable for Banner {
    type Model = LabelModel;

    fn configure(&mut self, model: &LabelModel) {
        self.text = model.text.to_uppercase();
    }
}

fn component_registry() -> ComponentRegistry<Category> {
    let mut registry = ComponentRegistry::new();
    registry.register_model::<Preferences>(Category::Layout);
    registry.register_component::<Label>(Category::Text);
    registry.register_model::<Address>(Category::Layout);
    registry
}

#[test]
fn component_registry_groups() {
    let registry = component_registry();
    assert_eq!(registry.len(), 3);

    let label = registry.find("Label").unwrap();
    assert!(label.has_component());
    assert_eq!(label.category(), "Text");
    assert_eq!(registry.id_of::<LabelModel>(), Some(label.id()));
    assert_eq!(registry.category(label.id()), Some(Category::Text));

    let groups: Vec<_> = registry
        .categorized()
        .into_iter()
        .map(|(category, group)| (category, group.iter().map(|r| r.name()).collect::<Vec<_>>()))
        .collect();
    assert_eq!(
        groups,
        [
            (Category::Text, vec!["Label"]),
            (Category::Layout, vec!["Preferences", "Address"]),
        ]
    );
}

#[test]
fn components_sharing_a_model() {
    let mut registry = ComponentRegistry::<Category>::new();
    let model = registry.register_model::<LabelModel>(Category::Layout);
    let label = registry.register_component::<Label>(Category::Text);
    let banner = registry.register_component::<Banner>(Category::Media);
    assert_eq!(registry.len(), 3);
    assert_ne!(label, banner);
    assert_ne!(model, label);

    assert_eq!(registry.register_component::<Banner>(Category::Media), banner);
    assert_eq!(registry.register_model::<LabelModel>(Category::Layout), model);
    assert_eq!(registry.len(), 3);

    assert_eq!(registry.id_of::<Label>(), Some(label));
    assert_eq!(registry.id_of::<Banner>(), Some(banner));
    assert_eq!(registry.id_of::<LabelModel>(), Some(model));

    let registration = registry.get(banner).unwrap();
    assert_eq!(registration.name(), "Banner");
    assert_eq!(registration.type_name(), type_name::<LabelModel>());
    assert_eq!(registration.component_type_name(), Some(type_name::<Banner>()));
    assert!(!registry.get(model).unwrap().has_component());

    let mut store = ConstructorStore::new(registry);
    store.select(Some(banner)).unwrap();
    store.set_value("text", "news").unwrap();
    let mut component = Banner::default();
    store.configure_component(&mut component).unwrap();
    assert_eq!(component.text, "NEWS");
}

#[test]
fn constructor_store_edits() {
    let registry = component_registry();
    let id = registry.id_of::<LabelModel>().unwrap();
    let mut store = ConstructorStore::new(registry);

    assert!(matches!(store.set_value("text", "x"), Err(StoreError::NoSelection)));
    assert!(store.build_current().is_none());

    store.select(Some(id)).unwrap();
    assert_eq!(store.current_values(), &LabelModel::default_values());

    assert_eq!(store.set_value("text", "Hello").unwrap(), Some(Value::from("")));
    store.set_value("size", Value::some(20)).unwrap();
    assert!(matches!(
        store.set_value("font", "Serif"),
        Err(StoreError::UnknownField { .. })
    ));
    assert!(matches!(
        store.set_value("text", 3),
        Err(StoreError::ShapeMismatch { .. })
    ));

    let model = store.build_current().unwrap().unwrap();
    let model = model.downcast::<LabelModel>().unwrap();
    assert_eq!(
        *model,
        LabelModel {
            text: "Hello".into(),
            size: Some(20)
        }
    );

    let mut label = Label::default();
    store.configure_component(&mut label).unwrap();
    assert_eq!((label.text.as_str(), label.size, label.configured), ("Hello", 20, 1));

    store.reset_to_defaults();
    assert_eq!(store.value("text"), Some(&Value::from("")));

    store.select(None).unwrap();
    assert!(store.selected().is_none());
    assert!(store.current_values().is_empty());
}

#[test]
fn constructor_store_rejects_unknown_components() {
    let registry = component_registry();
    let id = registry.id_of::<Preferences>().unwrap();
    let mut store = ConstructorStore::new(registry);
    store.select(Some(id)).unwrap();

    let mut label = Label::default();
    assert!(matches!(
        store.configure_component(&mut label),
        Err(StoreError::NotAComponent { .. })
    ));
}

#[test]
fn shared_store() {
    let registry = component_registry();
    let id = registry.id_of::<Address>().unwrap();
    let store = ConstructorStore::new(registry).into_shared();

    let writer = {
        let store = store.clone();
        std::thread::spawn(move || {
            let mut store = store.write().unwrap();
            store.select(Some(id)).unwrap();
            store.set_value("city", "Brockway").unwrap();
        })
    };
    writer.join().unwrap();

    let store = store.read().unwrap();
    let address = store.build_current().unwrap().unwrap();
    assert_eq!(address.downcast_ref::<Address>().unwrap().city, "Brockway");
}
